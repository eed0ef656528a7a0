use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_simple_address() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("user@example.com"));
}

#[test]
fn email_rejects_missing_tld() {
    assert!(!is_valid_email("a@b"));
}

#[test]
fn email_rejects_whitespace() {
    assert!(!is_valid_email("a @b.co"));
    assert!(!is_valid_email("a@b .co"));
    assert!(!is_valid_email(" a@b.co"));
}

#[test]
fn email_rejects_multiple_at_signs() {
    assert!(!is_valid_email("a@b@c.co"));
}

#[test]
fn email_rejects_empty_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b."));
}

// =============================================================
// Password criteria
// =============================================================

#[test]
fn criteria_all_satisfied() {
    let c = PasswordCriteria::check("Passw0rd!");
    assert_eq!(
        c,
        PasswordCriteria {
            length: true,
            uppercase: true,
            lowercase: true,
            digit: true,
            special: true,
        }
    );
    assert_eq!(c.score(), 5);
    assert!(c.is_strong());
}

#[test]
fn criteria_lowercase_only() {
    let c = PasswordCriteria::check("password");
    assert!(c.length);
    assert!(c.lowercase);
    assert!(!c.uppercase);
    assert!(!c.digit);
    assert!(!c.special);
    assert_eq!(c.score(), 2);
}

#[test]
fn criteria_are_independent() {
    // Short but otherwise complete: only the length criterion fails.
    let c = PasswordCriteria::check("Aa1!");
    assert!(!c.length);
    assert!(c.uppercase);
    assert!(c.lowercase);
    assert!(c.digit);
    assert!(c.special);
}

#[test]
fn strength_threshold_is_four() {
    // 3 of 5: length, uppercase, digit.
    assert!(!is_strong_password("PASSWORD1"));
    // 4 of 5: length, uppercase, lowercase, digit.
    assert!(is_strong_password("Password1"));
    // 5 of 5.
    assert!(is_strong_password("Passw0rd!"));
}

#[test]
fn strength_empty_password_scores_zero() {
    assert_eq!(PasswordCriteria::check("").score(), 0);
    assert!(!is_strong_password(""));
}

// =============================================================
// Password match
// =============================================================

#[test]
fn match_requires_identical_strings() {
    assert!(passwords_match("Abcdef1!", "Abcdef1!"));
    assert!(!passwords_match("Abcdef1!", "Abcdef1"));
}

#[test]
fn match_rejects_empty_confirm() {
    assert!(!passwords_match("Abcdef1!", ""));
}

#[test]
fn match_rejects_empty_empty() {
    assert!(!passwords_match("", ""));
}

// =============================================================
// Strength tier
// =============================================================

#[test]
fn tier_for_each_score() {
    assert_eq!(StrengthTier::from_score(0), StrengthTier::Weak);
    assert_eq!(StrengthTier::from_score(1), StrengthTier::Weak);
    assert_eq!(StrengthTier::from_score(2), StrengthTier::Weak);
    assert_eq!(StrengthTier::from_score(3), StrengthTier::Fair);
    assert_eq!(StrengthTier::from_score(4), StrengthTier::Good);
    assert_eq!(StrengthTier::from_score(5), StrengthTier::Strong);
}

#[test]
fn tier_labels() {
    assert_eq!(StrengthTier::Weak.label(), "Weak");
    assert_eq!(StrengthTier::Fair.label(), "Fair");
    assert_eq!(StrengthTier::Good.label(), "Good");
    assert_eq!(StrengthTier::Strong.label(), "Strong");
}

#[test]
fn tier_css_suffixes() {
    assert_eq!(StrengthTier::Weak.css_suffix(), "weak");
    assert_eq!(StrengthTier::Strong.css_suffix(), "strong");
}
