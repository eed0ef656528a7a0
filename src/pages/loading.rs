//! Timed transitional screen between signup and the dashboard.

use leptos::prelude::*;

/// Loading screen — pure display, no props and no logic. The owning
/// view-state holder decides when it appears and when it goes away.
#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="loading-page">
            <div class="loading-page__brand">
                <span class="loading-page__logo">"G"</span>
                <span class="loading-page__title">"CashEase"</span>
            </div>

            <div class="loading-page__card">
                <div class="loading-page__spinner">
                    <div class="loading-page__spinner-track"></div>
                    <div class="loading-page__spinner-arc"></div>
                </div>

                <h2 class="loading-page__heading">"Setting up your account"</h2>
                <p class="loading-page__note">
                    "Please wait while we prepare everything for you..."
                </p>

                <div class="loading-page__dots">
                    <span class="loading-page__dot"></span>
                    <span class="loading-page__dot loading-page__dot--second"></span>
                    <span class="loading-page__dot loading-page__dot--third"></span>
                </div>
            </div>
        </div>
    }
}
