//! Password policy and strength.
//!
//! [`validate_password`] enforces the signup policy and reports every unmet
//! rule at once. [`password_strength`] is an independent heuristic meant for
//! a strength meter: it never rejects anything.

use serde::Serialize;

use crate::foundation::{AsInput, ValidationError, ValidationResult};

/// Characters that count as "special" for both policy and strength.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Minimum password length required by the policy.
pub const MIN_PASSWORD_LENGTH: usize = 8;

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Which character classes a password contains.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
struct Composition {
    length: usize,
    lower: bool,
    upper: bool,
    digit: bool,
    special: bool,
}

impl Composition {
    fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut acc, c| {
            acc.length += 1;
            acc.lower |= c.is_ascii_lowercase();
            acc.upper |= c.is_ascii_uppercase();
            acc.digit |= c.is_ascii_digit();
            acc.special |= is_special(c);
            acc
        })
    }
}

// ============================================================================
// POLICY
// ============================================================================

/// Validates a password against the signup policy.
///
/// The policy requires at least 8 characters, an uppercase letter, a
/// lowercase letter, a digit, and one of `!@#$%^&*`. All rules are checked;
/// each unmet one appears in [`ValidationError::requirements`] and in the
/// message, in that order.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_password;
///
/// assert!(validate_password("Abcdef1!").is_ok());
///
/// let error = validate_password("abcdefgh").unwrap_err();
/// assert_eq!(
///     error.requirements(),
///     ["One uppercase letter", "One number", "One special character (!@#$%^&*)"]
/// );
/// ```
pub fn validate_password<I: AsInput + ?Sized>(value: &I) -> ValidationResult {
    let Some(password) = value.text().filter(|text| !text.is_empty()) else {
        return Err(ValidationError::required("Password is required"));
    };

    let composition = Composition::of(&password);
    let checks = [
        (
            composition.length >= MIN_PASSWORD_LENGTH,
            "At least 8 characters",
        ),
        (composition.upper, "One uppercase letter"),
        (composition.lower, "One lowercase letter"),
        (composition.digit, "One number"),
        (composition.special, "One special character (!@#$%^&*)"),
    ];

    let unmet: Vec<&'static str> = checks
        .iter()
        .filter(|(met, _)| !met)
        .map(|(_, requirement)| *requirement)
        .collect();

    if unmet.is_empty() {
        return Ok(());
    }

    Err(ValidationError::new(
        "password_weak",
        format!("Password must contain: {}", unmet.join(", ")),
    )
    .with_requirements(unmet))
}

// ============================================================================
// STRENGTH
// ============================================================================

/// Human label for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthLabel {
    /// Nothing typed yet.
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

/// Meter color for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthColor {
    Gray,
    Red,
    Yellow,
    Blue,
    Green,
}

/// Heuristic strength of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PasswordStrength {
    /// Score from 0 to 100.
    pub score: u8,
    pub label: StrengthLabel,
    pub color: StrengthColor,
}

impl PasswordStrength {
    const EMPTY: Self = Self {
        score: 0,
        label: StrengthLabel::None,
        color: StrengthColor::Gray,
    };

    fn from_score(score: u8) -> Self {
        let (label, color) = match score {
            0..40 => (StrengthLabel::Weak, StrengthColor::Red),
            40..70 => (StrengthLabel::Fair, StrengthColor::Yellow),
            70..90 => (StrengthLabel::Good, StrengthColor::Blue),
            _ => (StrengthLabel::Strong, StrengthColor::Green),
        };
        Self {
            score,
            label,
            color,
        }
    }
}

/// Scores a password for a strength meter.
///
/// Points: 20 for 8+ characters, another 20 for 12+, and 15 each for a
/// lowercase letter, an uppercase letter, a digit, and a special character.
/// The maximum is exactly 100.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::{password_strength, StrengthLabel};
///
/// assert_eq!(password_strength("").label, StrengthLabel::None);
/// assert_eq!(password_strength("Password123!").score, 100);
/// assert_eq!(password_strength("abc").label, StrengthLabel::Weak);
/// ```
pub fn password_strength<I: AsInput + ?Sized>(value: &I) -> PasswordStrength {
    let Some(password) = value.text().filter(|text| !text.is_empty()) else {
        return PasswordStrength::EMPTY;
    };

    let composition = Composition::of(&password);
    let points: [(bool, u8); 6] = [
        (composition.length >= 8, 20),
        (composition.length >= 12, 20),
        (composition.lower, 15),
        (composition.upper, 15),
        (composition.digit, 15),
        (composition.special, 15),
    ];

    let score: u8 = points
        .iter()
        .filter(|(earned, _)| *earned)
        .map(|(_, points)| points)
        .sum();

    PasswordStrength::from_score(score)
}

// ============================================================================
// TESTS
// ============================================================================
