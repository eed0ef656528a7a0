use super::*;

#[test]
fn app_view_default_is_signup() {
    assert_eq!(AppView::default(), AppView::Signup);
}

#[test]
fn app_view_variants_are_distinct() {
    assert_ne!(AppView::Signup, AppView::Loading);
    assert_ne!(AppView::Signup, AppView::Dashboard);
    assert_ne!(AppView::Loading, AppView::Dashboard);
}
