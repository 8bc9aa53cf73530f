//! Presence and length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"café"` has
//! length 4. Each validator takes the field's display name so the message
//! reads naturally in a form, e.g. `"Name is required"`.

use crate::foundation::{AsInput, ValidationError, ValidationResult};

/// Display name used when a caller has no better one.
pub const DEFAULT_FIELD_NAME: &str = "This field";

/// Validates that a value is present and not the empty string.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_required;
/// use serde_json::json;
///
/// assert!(validate_required("x", "Name").is_ok());
/// assert!(validate_required(&json!(0), "Count").is_ok());
/// assert_eq!(validate_required("", "Age").unwrap_err().message, "Age is required");
/// assert!(validate_required(&json!(null), "Age").is_err());
/// ```
pub fn validate_required<I: AsInput + ?Sized>(value: &I, field_name: &str) -> ValidationResult {
    if value.is_empty_input() {
        Err(ValidationError::required_field(field_name))
    } else {
        Ok(())
    }
}

/// Validates that a value has at least `min` characters.
///
/// An absent or empty value always fails, even when `min` is zero.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_min_length;
///
/// assert!(validate_min_length("Sam", 3, "Name").is_ok());
/// assert_eq!(
///     validate_min_length("Al", 3, "Name").unwrap_err().message,
///     "Name must be at least 3 characters"
/// );
/// ```
pub fn validate_min_length<I: AsInput + ?Sized>(
    value: &I,
    min: usize,
    field_name: &str,
) -> ValidationResult {
    let length = value.text().map_or(0, |text| text.chars().count());
    if length == 0 || length < min {
        Err(ValidationError::min_length(field_name, min, length))
    } else {
        Ok(())
    }
}

/// Validates that a value has at most `max` characters.
///
/// Absent or empty values pass; pair with [`validate_required`] when the
/// field is mandatory.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_max_length;
///
/// assert!(validate_max_length("", 3, "Code").is_ok());
/// assert!(validate_max_length("abc", 3, "Code").is_ok());
/// assert_eq!(
///     validate_max_length("abcd", 3, "Code").unwrap_err().message,
///     "Code must be at most 3 characters"
/// );
/// ```
pub fn validate_max_length<I: AsInput + ?Sized>(
    value: &I,
    max: usize,
    field_name: &str,
) -> ValidationResult {
    let Some(text) = value.text().filter(|text| !text.is_empty()) else {
        return Ok(());
    };

    let length = text.chars().count();
    if length > max {
        Err(ValidationError::max_length(field_name, max, length))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required() {
        assert!(validate_required("hello", DEFAULT_FIELD_NAME).is_ok());
        assert!(validate_required(" ", DEFAULT_FIELD_NAME).is_ok());
        assert!(validate_required(&json!(false), DEFAULT_FIELD_NAME).is_ok());

        let error = validate_required(&None::<String>, DEFAULT_FIELD_NAME).unwrap_err();
        assert_eq!(error.code, "required");
        assert_eq!(error.message, "This field is required");
    }

    #[test]
    fn test_min_length() {
        assert!(validate_min_length("abc", 3, "Name").is_ok());
        assert!(validate_min_length("abcd", 3, "Name").is_ok());

        let error = validate_min_length("ab", 3, "Name").unwrap_err();
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("min"), Some("3"));
        assert_eq!(error.param("actual"), Some("2"));
    }

    #[test]
    fn test_min_length_rejects_empty_even_for_zero() {
        assert!(validate_min_length("", 0, "Name").is_err());
        assert!(validate_min_length(&json!(null), 1, "Name").is_err());
    }

    #[test]
    fn test_min_length_counts_chars() {
        assert!(validate_min_length("café", 4, "Name").is_ok());
        assert!(validate_min_length("日本", 3, "Name").is_err());
    }

    #[test]
    fn test_max_length() {
        assert!(validate_max_length("héllo", 5, "Bio").is_ok());

        let error = validate_max_length("héllo!", 5, "Bio").unwrap_err();
        assert_eq!(error.code, "max_length");
        assert_eq!(error.message, "Bio must be at most 5 characters");
        assert_eq!(error.param("actual"), Some("6"));
    }

    #[test]
    fn test_max_length_skips_absent() {
        assert!(validate_max_length(&json!(null), 0, "Bio").is_ok());
        assert!(validate_max_length("", 0, "Bio").is_ok());
    }

    #[test]
    fn test_numbers_use_their_text_form() {
        assert!(validate_max_length(&json!(12345), 4, "Zip").is_err());
        assert!(validate_min_length(&42_i64, 2, "Code").is_ok());
    }
}
