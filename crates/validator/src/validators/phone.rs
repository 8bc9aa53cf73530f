//! Phone number validator.
//!
//! Accepts the formats people actually type into a contact form: digits
//! with optional spaces, dashes, parentheses and a plus sign, e.g.
//! `+1 (415) 555-1234`.

use crate::foundation::{AsInput, ValidationError, ValidationResult};

/// Fewest digits a phone number may contain once formatting is stripped.
pub const MIN_PHONE_DIGITS: usize = 10;

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')')
}

/// Validates a phone number.
///
/// Checks run in order: required, allowed characters
/// (digits, space, `-`, `+`, `(`, `)`), at least ten digits.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_phone;
///
/// assert!(validate_phone("+1 (415) 555-1234").is_ok());
/// assert_eq!(validate_phone("555-1234").unwrap_err().code, "phone_too_short");
/// assert_eq!(validate_phone("415.555.1234").unwrap_err().code, "phone_invalid_chars");
/// ```
pub fn validate_phone<I: AsInput + ?Sized>(value: &I) -> ValidationResult {
    let Some(phone) = value.text().filter(|text| !text.is_empty()) else {
        return Err(ValidationError::required("Phone number is required"));
    };

    if !phone.chars().all(is_phone_char) {
        return Err(ValidationError::new(
            "phone_invalid_chars",
            "Phone number can only contain digits, spaces, dashes, plus signs and parentheses",
        ));
    }

    let digit_count = phone.chars().filter(char::is_ascii_digit).count();
    if digit_count < MIN_PHONE_DIGITS {
        return Err(ValidationError::new(
            "phone_too_short",
            format!("Phone number must have at least {MIN_PHONE_DIGITS} digits"),
        )
        .with_param("min", MIN_PHONE_DIGITS.to_string())
        .with_param("actual", digit_count.to_string()));
    }

    Ok(())
}
