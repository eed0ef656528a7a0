#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Tabs in the dashboard navigation grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavTab {
    #[default]
    Home,
    Reports,
    History,
    Profile,
}

impl NavTab {
    pub const ALL: [Self; 4] = [Self::Home, Self::Reports, Self::History, Self::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Reports => "Reports",
            Self::History => "History",
            Self::Profile => "Profile",
        }
    }
}

/// Local view state for the dashboard page: the highlighted navigation
/// tab and whether the slide-out menu drawer is open.
#[derive(Clone, Copy, Debug, Default)]
pub struct DashboardState {
    pub active_tab: NavTab,
    pub menu_open: bool,
}
