//! Username validator.

use crate::foundation::{AsInput, ValidationError, ValidationResult};

/// Shortest accepted username.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Longest accepted username.
pub const MAX_USERNAME_LENGTH: usize = 20;

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-')
}

/// Validates a username: 3 to 20 characters of ASCII letters, digits,
/// `_` and `-`.
///
/// Length is checked before the character set, so `"a!"` reports
/// `username_too_short`.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_username;
///
/// assert!(validate_username("penny_pincher-42").is_ok());
/// assert_eq!(validate_username("jo").unwrap_err().code, "username_too_short");
/// assert_eq!(validate_username("jo jo").unwrap_err().code, "username_invalid_chars");
/// ```
pub fn validate_username<I: AsInput + ?Sized>(value: &I) -> ValidationResult {
    let Some(username) = value.text().filter(|text| !text.is_empty()) else {
        return Err(ValidationError::required("Username is required"));
    };

    let length = username.chars().count();
    if length < MIN_USERNAME_LENGTH {
        return Err(ValidationError::new(
            "username_too_short",
            format!("Username must be at least {MIN_USERNAME_LENGTH} characters"),
        )
        .with_param("min", MIN_USERNAME_LENGTH.to_string())
        .with_param("actual", length.to_string()));
    }

    if length > MAX_USERNAME_LENGTH {
        return Err(ValidationError::new(
            "username_too_long",
            format!("Username must be at most {MAX_USERNAME_LENGTH} characters"),
        )
        .with_param("max", MAX_USERNAME_LENGTH.to_string())
        .with_param("actual", length.to_string()));
    }

    if !username.chars().all(is_username_char) {
        return Err(ValidationError::new(
            "username_invalid_chars",
            "Username can only contain letters, numbers, underscores and hyphens",
        ));
    }

    Ok(())
}
