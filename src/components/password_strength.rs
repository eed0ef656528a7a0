//! Password strength meter with the criteria checklist.

use leptos::prelude::*;

use crate::components::icon::{Icon, SvgIcon};
use crate::state::signup::SignupState;
use crate::state::validate::{PasswordCriteria, StrengthTier};

/// Strength meter shown under the password field while it is non-empty.
///
/// Tier label and bar width are derived from the criteria score on every
/// render; nothing is stored. The checklist shows four of the five scored
/// criteria (the special-character criterion contributes to the score but
/// has no checklist row).
#[component]
pub fn PasswordStrength(state: RwSignal<SignupState>) -> impl IntoView {
    let criteria = move || PasswordCriteria::check(&state.get().password);
    let tier = move || StrengthTier::from_score(criteria().score());
    let bar_class = move || format!("strength__bar strength__bar--{}", tier().css_suffix());
    let label_class = move || format!("strength__label strength__label--{}", tier().css_suffix());
    let bar_width = move || format!("{}%", u32::from(criteria().score()) * 100 / 5);

    let checklist = move || {
        let c = criteria();
        [
            (c.length, "8+ characters"),
            (c.uppercase, "Uppercase letter"),
            (c.lowercase, "Lowercase letter"),
            (c.digit, "Number"),
        ]
        .into_iter()
        .map(|(met, text)| {
            view! {
                <div class="strength__criterion" class:strength__criterion--met=met>
                    {if met {
                        view! { <SvgIcon icon=Icon::Check class="strength__criterion-icon"/> }
                            .into_any()
                    } else {
                        view! { <span class="strength__criterion-dot"></span> }.into_any()
                    }}
                    {text}
                </div>
            }
        })
        .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || !state.get().password.is_empty()>
            <div class="strength">
                <div class="strength__header">
                    <span class="strength__caption">"Password Strength:"</span>
                    <span class=label_class>{move || tier().label()}</span>
                </div>
                <div class="strength__track">
                    <div class=bar_class style:width=bar_width></div>
                </div>
                <div class="strength__criteria">{checklist}</div>
            </div>
        </Show>
    }
}
