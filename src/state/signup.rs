//! Signup draft state and the submission state machine.
//!
//! The draft holds raw field values plus the touched set; every validity
//! judgement is a projection recomputed on demand from those, so there are
//! no cached flags to drift out of sync.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::state::validate::{is_strong_password, is_valid_email, passwords_match};

/// The three signup form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

/// Three-valued display status for a field.
///
/// A field stays `Unvalidated` until it is touched; after that its
/// validator decides between `Valid` and `Invalid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    Unvalidated,
    Valid,
    Invalid,
}

/// Submission phase. Submit attempts are accepted only while `Editing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
}

/// Outcome of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid; the machine moved to `Submitting`.
    Accepted,
    /// At least one field failed validation; still `Editing`.
    Rejected,
    /// A submission is already in flight; nothing changed.
    AlreadySubmitting,
}

/// Which fields have been touched: blurred at least once, or forced by a
/// submit attempt. Monotonic — there is no untouch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Touched {
    pub email: bool,
    pub password: bool,
    pub confirm_password: bool,
}

impl Touched {
    pub fn contains(self, field: Field) -> bool {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    fn mark(&mut self, field: Field) {
        match field {
            Field::Email => self.email = true,
            Field::Password => self.password = true,
            Field::ConfirmPassword => self.confirm_password = true,
        }
    }

    fn mark_all(&mut self) {
        self.email = true;
        self.password = true;
        self.confirm_password = true;
    }
}

/// In-memory draft of the signup attempt currently being edited.
///
/// Owned by the signup page and discarded when that view is replaced.
#[derive(Clone, Debug, Default)]
pub struct SignupState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub touched: Touched,
    /// At most one focused field; purely presentational.
    pub focused: Option<Field>,
    pub phase: Phase,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

impl SignupState {
    /// Whether a field's current value passes its validator, ignoring touch.
    pub fn field_valid(&self, field: Field) -> bool {
        match field {
            Field::Email => is_valid_email(&self.email),
            Field::Password => is_strong_password(&self.password),
            Field::ConfirmPassword => passwords_match(&self.password, &self.confirm_password),
        }
    }

    /// All three fields valid at once.
    pub fn form_valid(&self) -> bool {
        self.field_valid(Field::Email)
            && self.field_valid(Field::Password)
            && self.field_valid(Field::ConfirmPassword)
    }

    /// The projection shown to the user: border class, icon, error text.
    pub fn validation(&self, field: Field) -> Validation {
        if !self.touched.contains(field) {
            Validation::Unvalidated
        } else if self.field_valid(field) {
            Validation::Valid
        } else {
            Validation::Invalid
        }
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    /// Losing focus clears the highlight and marks the field touched.
    pub fn blur(&mut self, field: Field) {
        if self.focused == Some(field) {
            self.focused = None;
        }
        self.touched.mark(field);
    }

    /// Attempt to submit the form.
    ///
    /// A no-op while a submission is already in flight. Otherwise every
    /// field is forced touched so errors surface immediately, then the
    /// machine either moves to `Submitting` or stays in `Editing`.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase == Phase::Submitting {
            return SubmitOutcome::AlreadySubmitting;
        }

        self.touched.mark_all();

        if !self.form_valid() {
            return SubmitOutcome::Rejected;
        }

        self.phase = Phase::Submitting;
        SubmitOutcome::Accepted
    }
}
