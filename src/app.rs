//! Root application component: holds the active view and drives the
//! one-way signup -> loading -> dashboard flow.

use std::time::Duration;

use leptos::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::pages::loading::LoadingPage;
use crate::pages::signup::SignupPage;
use crate::state::view::AppView;

/// How long the loading screen stays up before the dashboard appears.
const LOADING_DELAY: Duration = Duration::from_secs(3);

/// Root component. One signal selects the active view; the signup page's
/// completion callback is the only way to move forward, and there is no
/// way back.
#[component]
pub fn App() -> impl IntoView {
    let view = RwSignal::new(AppView::default());

    let on_signup = Callback::new(move |()| {
        log::info!("signup complete, showing loading screen");
        view.set(AppView::Loading);

        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(LOADING_DELAY).await;
            // try_set: a no-op if the owner was disposed while the timer
            // was pending, so a discarded view is never acted on.
            let _ = view.try_set(AppView::Dashboard);
        });
    });

    view! {
        {move || match view.get() {
            AppView::Signup => view! { <SignupPage on_signup=on_signup/> }.into_any(),
            AppView::Loading => view! { <LoadingPage/> }.into_any(),
            AppView::Dashboard => view! { <DashboardPage/> }.into_any(),
        }}
    }
}
