use super::*;

fn valid_draft() -> SignupState {
    SignupState {
        email: "user@example.com".to_owned(),
        password: "Abcdef1!".to_owned(),
        confirm_password: "Abcdef1!".to_owned(),
        ..SignupState::default()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_draft_is_editing_and_untouched() {
    let state = SignupState::default();
    assert_eq!(state.phase, Phase::Editing);
    assert_eq!(state.touched, Touched::default());
    assert!(state.focused.is_none());
    assert!(!state.show_password);
    assert!(!state.show_confirm_password);
}

// =============================================================
// Touch gating
// =============================================================

#[test]
fn untouched_field_is_unvalidated_regardless_of_content() {
    let mut state = SignupState::default();
    assert_eq!(state.validation(Field::Email), Validation::Unvalidated);

    state.email = "not-an-email".to_owned();
    assert_eq!(state.validation(Field::Email), Validation::Unvalidated);

    state.email = "user@example.com".to_owned();
    assert_eq!(state.validation(Field::Email), Validation::Unvalidated);
}

#[test]
fn touched_field_projects_valid_or_invalid() {
    let mut state = SignupState::default();
    state.blur(Field::Email);
    assert_eq!(state.validation(Field::Email), Validation::Invalid);

    state.email = "user@example.com".to_owned();
    assert_eq!(state.validation(Field::Email), Validation::Valid);
}

#[test]
fn touch_is_monotonic() {
    let mut state = SignupState::default();
    state.blur(Field::Password);
    state.blur(Field::Password);
    assert!(state.touched.password);
    assert!(!state.touched.email);
    assert!(!state.touched.confirm_password);
}

// =============================================================
// Focus / blur
// =============================================================

#[test]
fn focus_tracks_at_most_one_field() {
    let mut state = SignupState::default();
    state.focus(Field::Email);
    assert_eq!(state.focused, Some(Field::Email));

    state.focus(Field::Password);
    assert_eq!(state.focused, Some(Field::Password));
}

#[test]
fn blur_clears_focus_and_marks_touched() {
    let mut state = SignupState::default();
    state.focus(Field::Email);
    state.blur(Field::Email);
    assert!(state.focused.is_none());
    assert!(state.touched.email);
}

#[test]
fn blur_of_other_field_keeps_focus() {
    let mut state = SignupState::default();
    state.focus(Field::Email);
    state.blur(Field::Password);
    assert_eq!(state.focused, Some(Field::Email));
}

// =============================================================
// Per-field validity
// =============================================================

#[test]
fn confirm_password_empty_is_invalid_even_when_password_empty() {
    let mut state = SignupState::default();
    state.blur(Field::ConfirmPassword);
    assert_eq!(state.validation(Field::ConfirmPassword), Validation::Invalid);
}

#[test]
fn confirm_password_must_equal_password() {
    let mut state = valid_draft();
    state.confirm_password = "Abcdef1?".to_owned();
    assert!(!state.field_valid(Field::ConfirmPassword));
    assert!(!state.form_valid());
}

#[test]
fn form_valid_requires_all_three_fields() {
    let state = valid_draft();
    assert!(state.form_valid());

    let mut state = valid_draft();
    state.email = "a@b".to_owned();
    assert!(!state.form_valid());

    let mut state = valid_draft();
    state.password = "password".to_owned();
    state.confirm_password = "password".to_owned();
    assert!(!state.form_valid());
}

// =============================================================
// Submission state machine
// =============================================================

#[test]
fn submit_forces_all_fields_touched() {
    let mut state = SignupState::default();
    let outcome = state.submit();
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert!(state.touched.email);
    assert!(state.touched.password);
    assert!(state.touched.confirm_password);
}

#[test]
fn submit_with_untouched_invalid_email_surfaces_error_immediately() {
    let mut state = valid_draft();
    state.email = "not-an-email".to_owned();
    assert_eq!(state.validation(Field::Email), Validation::Unvalidated);

    let outcome = state.submit();
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(state.validation(Field::Email), Validation::Invalid);
}

#[test]
fn rejected_submit_stays_in_editing() {
    let mut state = SignupState::default();
    state.submit();
    assert_eq!(state.phase, Phase::Editing);
}

#[test]
fn valid_submit_moves_to_submitting() {
    let mut state = valid_draft();
    let outcome = state.submit();
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(state.phase, Phase::Submitting);
}

#[test]
fn resubmit_while_submitting_is_a_noop() {
    let mut state = valid_draft();
    assert_eq!(state.submit(), SubmitOutcome::Accepted);

    let before = state.clone();
    assert_eq!(state.submit(), SubmitOutcome::AlreadySubmitting);
    assert_eq!(state.phase, before.phase);
    assert_eq!(state.touched, before.touched);
}

#[test]
fn edits_during_submitting_do_not_change_phase() {
    let mut state = valid_draft();
    state.submit();

    state.email = "someone-else@example.com".to_owned();
    state.blur(Field::Email);
    assert_eq!(state.phase, Phase::Submitting);
}
