//! IBAN format validator.
//!
//! Only the shape is checked: two-letter country code, two check digits,
//! and up to 30 alphanumerics. The mod-97 checksum is not verified.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{AsInput, ValidationError, ValidationResult};

static IBAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").unwrap());

/// Strips whitespace and uppercases, the way IBANs are usually printed.
fn normalize(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validates the format of an IBAN.
///
/// Spaces and lowercase letters are tolerated, so the grouped form
/// `de89 3704 0044 0532 0130 00` passes.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_iban;
///
/// assert!(validate_iban("DE89 3704 0044 0532 0130 00").is_ok());
/// assert_eq!(validate_iban("1234").unwrap_err().code, "iban_invalid");
/// ```
pub fn validate_iban<I: AsInput + ?Sized>(value: &I) -> ValidationResult {
    let Some(iban) = value.text().filter(|text| !text.is_empty()) else {
        return Err(ValidationError::required("IBAN is required"));
    };

    if IBAN_REGEX.is_match(&normalize(&iban)) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "iban_invalid",
            "Please enter a valid IBAN",
        ))
    }
}
