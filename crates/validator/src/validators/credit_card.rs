//! Credit card number validator (length and Luhn checksum).

use crate::foundation::{AsInput, ValidationError, ValidationResult};

/// Accepted card number lengths, in digits.
pub const CARD_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 13..=19;

/// Returns true if the digits of `digits` pass the Luhn (mod 10) checksum.
///
/// Non-digit characters are ignored. A string with no digits is not valid.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::luhn_checksum_valid;
///
/// assert!(luhn_checksum_valid("4532015112830366"));
/// assert!(luhn_checksum_valid("4532 0151 1283 0366"));
/// assert!(!luhn_checksum_valid("4532015112830367"));
/// assert!(!luhn_checksum_valid(""));
/// ```
pub fn luhn_checksum_valid(digits: &str) -> bool {
    let mut count = 0usize;
    let mut sum = 0u32;

    let digits = digits.chars().rev().filter_map(|c| c.to_digit(10));
    for (position, digit) in digits.enumerate() {
        let digit = if position % 2 == 1 {
            let doubled = digit * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            digit
        };
        sum += digit;
        count += 1;
    }

    count > 0 && sum % 10 == 0
}

/// Validates a credit card number.
///
/// Everything except digits is stripped first, so `4532 0151 1283 0366`
/// and `4532-0151-1283-0366` are both accepted. The remaining digits must
/// number 13 to 19 and pass the Luhn checksum.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_credit_card;
///
/// assert!(validate_credit_card("4532 0151 1283 0366").is_ok());
/// assert_eq!(validate_credit_card("1234").unwrap_err().code, "card_length");
/// assert_eq!(validate_credit_card("4532015112830367").unwrap_err().code, "card_checksum");
/// ```
pub fn validate_credit_card<I: AsInput + ?Sized>(value: &I) -> ValidationResult {
    let Some(number) = value.text().filter(|text| !text.is_empty()) else {
        return Err(ValidationError::required("Card number is required"));
    };

    let digits: String = number.chars().filter(char::is_ascii_digit).collect();

    if !CARD_LENGTH_RANGE.contains(&digits.len()) {
        return Err(ValidationError::new(
            "card_length",
            "Card number must be between 13 and 19 digits",
        )
        .with_param("actual", digits.len().to_string()));
    }

    if !luhn_checksum_valid(&digits) {
        return Err(ValidationError::new(
            "card_checksum",
            "Please enter a valid card number",
        ));
    }

    Ok(())
}
