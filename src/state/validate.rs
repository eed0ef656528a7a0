//! Pure field validators for the signup form.
//!
//! Every function here is a side-effect-free function of its string
//! inputs, recomputed on each evaluation. Nothing is cached.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

/// Accepted email shape: `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Punctuation accepted by the "special character" password criterion.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// True iff `email` matches the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The five independent password strength criteria.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordCriteria {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordCriteria {
    /// Evaluate all five criteria against `password`.
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    /// Strength score: how many criteria are satisfied (0-5).
    pub fn score(self) -> u8 {
        u8::from(self.length)
            + u8::from(self.uppercase)
            + u8::from(self.lowercase)
            + u8::from(self.digit)
            + u8::from(self.special)
    }

    /// A password is strong enough at a score of 4 of 5.
    pub fn is_strong(self) -> bool {
        self.score() >= 4
    }
}

/// True iff `password` satisfies at least 4 of the 5 strength criteria.
pub fn is_strong_password(password: &str) -> bool {
    PasswordCriteria::check(password).is_strong()
}

/// True iff `confirm` is non-empty and identical to `password`.
///
/// Empty/empty is deliberately NOT a match.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && confirm == password
}

/// Display tier for the password strength meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthTier {
    /// Tier for a given strength score.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3 => Self::Fair,
            4 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// Suffix for the `strength__bar--*` / `strength__label--*` classes.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }
}
