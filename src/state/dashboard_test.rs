use super::*;

#[test]
fn dashboard_defaults_to_home_with_menu_closed() {
    let state = DashboardState::default();
    assert_eq!(state.active_tab, NavTab::Home);
    assert!(!state.menu_open);
}

#[test]
fn nav_tab_labels() {
    assert_eq!(NavTab::Home.label(), "Home");
    assert_eq!(NavTab::Reports.label(), "Reports");
    assert_eq!(NavTab::History.label(), "History");
    assert_eq!(NavTab::Profile.label(), "Profile");
}

#[test]
fn nav_tab_all_lists_each_tab_once() {
    assert_eq!(NavTab::ALL.len(), 4);
    for (i, a) in NavTab::ALL.iter().enumerate() {
        for (j, b) in NavTab::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}
