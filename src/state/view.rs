#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Which of the three top-level views is currently shown.
///
/// The flow is linear and one-way: signup, then a timed loading
/// transition, then the dashboard. There is no way back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppView {
    #[default]
    Signup,
    Loading,
    Dashboard,
}
