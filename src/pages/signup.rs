//! Signup page: the three validated fields and the submission flow.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::icon::{Icon, SvgIcon};
use crate::components::password_strength::PasswordStrength;
use crate::state::signup::{Field, Phase, SignupState, SubmitOutcome, Validation};

/// Simulated account-creation latency. There is no failure path: the
/// delay always elapses and always succeeds.
const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Signup form page.
///
/// Owns the [`SignupState`] draft for the lifetime of the view. On a
/// validated submit it waits out [`SUBMIT_DELAY`] and then invokes
/// `on_signup` exactly once; the caller replaces this view in response.
#[component]
pub fn SignupPage(#[prop(into)] on_signup: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(SignupState::default());

    let input_class = move |field: Field| {
        let s = state.get();
        if s.focused == Some(field) {
            return "field__input field__input--focused";
        }
        match s.validation(field) {
            Validation::Valid => "field__input field__input--valid",
            Validation::Invalid => "field__input field__input--invalid",
            Validation::Unvalidated => "field__input",
        }
    };

    let dot_class = move |field: Field| {
        if state.get().field_valid(field) {
            "signup-page__dot signup-page__dot--done"
        } else {
            "signup-page__dot"
        }
    };

    let submitting = move || state.get().phase == Phase::Submitting;
    let form_valid = move || state.get().form_valid();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(outcome) = state.try_update(SignupState::submit) else {
            return;
        };
        match outcome {
            SubmitOutcome::Accepted => {
                log::info!("signup accepted, simulating account creation");
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(SUBMIT_DELAY).await;
                    // Only notify if the view is still alive; a view torn
                    // down mid-delay must not act.
                    if state.try_with_untracked(|_| ()).is_some() {
                        on_signup.run(());
                    }
                });
            }
            SubmitOutcome::Rejected => {
                log::debug!("signup submit rejected by field validation");
            }
            SubmitOutcome::AlreadySubmitting => {}
        }
    };

    view! {
        <div class="signup-page">
            <div class="signup-page__inner">
                <header class="signup-page__header">
                    <div class="signup-page__brand">
                        <span class="signup-page__logo">"G"</span>
                        <span class="signup-page__title">"CashEase"</span>
                    </div>
                    <p class="signup-page__tagline">"Create your account to get started"</p>

                    <div class="signup-page__dots">
                        <span class=move || dot_class(Field::Email)></span>
                        <span class=move || dot_class(Field::Password)></span>
                        <span class=move || dot_class(Field::ConfirmPassword)></span>
                    </div>
                </header>

                <div class="signup-page__card">
                    <h1 class="signup-page__heading">"Sign Up"</h1>

                    // novalidate: submit attempts must always reach the
                    // state machine so it can force-touch the fields.
                    <form class="signup-page__form" novalidate=true on:submit=on_submit>
                        <div class="field">
                            <label class="field__label" for="email">
                                <SvgIcon icon=Icon::Mail class="field__label-icon"/>
                                "Email"
                            </label>
                            <div class="field__control">
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="Enter your email"
                                    class=move || input_class(Field::Email)
                                    prop:value=move || state.get().email
                                    on:input=move |ev| {
                                        state.update(|s| s.email = event_target_value(&ev))
                                    }
                                    on:focus=move |_| state.update(|s| s.focus(Field::Email))
                                    on:blur=move |_| state.update(|s| s.blur(Field::Email))
                                />
                                <span class="field__adornment">
                                    {move || match state.get().validation(Field::Email) {
                                        Validation::Valid => {
                                            view! {
                                                <SvgIcon icon=Icon::Check class="field__icon field__icon--valid"/>
                                            }
                                                .into_any()
                                        }
                                        Validation::Invalid => {
                                            view! {
                                                <SvgIcon icon=Icon::Cross class="field__icon field__icon--invalid"/>
                                            }
                                                .into_any()
                                        }
                                        Validation::Unvalidated => ().into_any(),
                                    }}
                                </span>
                            </div>
                            <Show when=move || {
                                state.get().validation(Field::Email) == Validation::Invalid
                            }>
                                <div class="field__error">
                                    <SvgIcon icon=Icon::Alert class="field__error-icon"/>
                                    "Please enter a valid email address"
                                </div>
                            </Show>
                        </div>

                        <div class="field">
                            <label class="field__label" for="password">
                                <SvgIcon icon=Icon::Lock class="field__label-icon"/>
                                "Password"
                            </label>
                            <div class="field__control">
                                <input
                                    id="password"
                                    type=move || if state.get().show_password { "text" } else { "password" }
                                    placeholder="Create a password"
                                    class=move || input_class(Field::Password)
                                    prop:value=move || state.get().password
                                    on:input=move |ev| {
                                        state.update(|s| s.password = event_target_value(&ev))
                                    }
                                    on:focus=move |_| state.update(|s| s.focus(Field::Password))
                                    on:blur=move |_| state.update(|s| s.blur(Field::Password))
                                />
                                <span class="field__adornment">
                                    <Show when=move || {
                                        state.get().validation(Field::Password) == Validation::Valid
                                    }>
                                        <SvgIcon icon=Icon::Check class="field__icon field__icon--valid"/>
                                    </Show>
                                    <button
                                        type="button"
                                        class="field__toggle"
                                        on:click=move |_| {
                                            state.update(|s| s.show_password = !s.show_password)
                                        }
                                    >
                                        {move || {
                                            let icon = if state.get().show_password {
                                                Icon::EyeOff
                                            } else {
                                                Icon::Eye
                                            };
                                            view! { <SvgIcon icon=icon class="field__icon"/> }
                                        }}
                                    </button>
                                </span>
                            </div>
                            <PasswordStrength state=state/>
                        </div>

                        <div class="field">
                            <label class="field__label" for="confirm-password">
                                <SvgIcon icon=Icon::Lock class="field__label-icon"/>
                                "Confirm Password"
                            </label>
                            <div class="field__control">
                                <input
                                    id="confirm-password"
                                    type=move || {
                                        if state.get().show_confirm_password { "text" } else { "password" }
                                    }
                                    placeholder="Confirm your password"
                                    class=move || input_class(Field::ConfirmPassword)
                                    prop:value=move || state.get().confirm_password
                                    on:input=move |ev| {
                                        state.update(|s| s.confirm_password = event_target_value(&ev))
                                    }
                                    on:focus=move |_| state.update(|s| s.focus(Field::ConfirmPassword))
                                    on:blur=move |_| state.update(|s| s.blur(Field::ConfirmPassword))
                                />
                                <span class="field__adornment">
                                    {move || match state.get().validation(Field::ConfirmPassword) {
                                        Validation::Valid => {
                                            view! {
                                                <SvgIcon icon=Icon::Check class="field__icon field__icon--valid"/>
                                            }
                                                .into_any()
                                        }
                                        Validation::Invalid => {
                                            view! {
                                                <SvgIcon icon=Icon::Cross class="field__icon field__icon--invalid"/>
                                            }
                                                .into_any()
                                        }
                                        Validation::Unvalidated => ().into_any(),
                                    }}
                                    <button
                                        type="button"
                                        class="field__toggle"
                                        on:click=move |_| {
                                            state
                                                .update(|s| {
                                                    s.show_confirm_password = !s.show_confirm_password;
                                                })
                                        }
                                    >
                                        {move || {
                                            let icon = if state.get().show_confirm_password {
                                                Icon::EyeOff
                                            } else {
                                                Icon::Eye
                                            };
                                            view! { <SvgIcon icon=icon class="field__icon"/> }
                                        }}
                                    </button>
                                </span>
                            </div>
                            <Show when=move || {
                                state.get().validation(Field::ConfirmPassword) == Validation::Invalid
                            }>
                                <div class="field__error">
                                    <SvgIcon icon=Icon::Alert class="field__error-icon"/>
                                    "Passwords do not match"
                                </div>
                            </Show>
                        </div>

                        <button
                            type="submit"
                            class="signup-page__submit"
                            class:signup-page__submit--ready=move || form_valid() && !submitting()
                            disabled=move || submitting() || !form_valid()
                        >
                            {move || {
                                if submitting() {
                                    view! {
                                        <span class="signup-page__submit-spinner"></span>
                                        "Creating Account..."
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        "Create Account"
                                        <Show when=form_valid>
                                            <SvgIcon icon=Icon::Check class="signup-page__submit-check"/>
                                        </Show>
                                    }
                                        .into_any()
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
