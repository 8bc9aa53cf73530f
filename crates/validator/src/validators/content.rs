//! Email and URL validators.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{AsInput, ValidationError, ValidationResult};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// ============================================================================
// EMAIL
// ============================================================================

/// Validates an email address of the shape `local@domain.tld`.
///
/// The local part and domain may not contain whitespace or a second `@`,
/// and the domain needs at least one dot.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_email;
///
/// assert!(validate_email("sam@example.com").is_ok());
/// assert_eq!(validate_email("").unwrap_err().code, "required");
/// assert_eq!(validate_email("sam@example").unwrap_err().code, "email_invalid");
/// ```
pub fn validate_email<I: AsInput + ?Sized>(value: &I) -> ValidationResult {
    let Some(email) = value.text().filter(|text| !text.is_empty()) else {
        return Err(ValidationError::required("Email is required"));
    };

    if EMAIL_REGEX.is_match(&email) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "email_invalid",
            "Please enter a valid email address",
        ))
    }
}

// ============================================================================
// URL
// ============================================================================

/// Validates an absolute URL.
///
/// The input must parse as an absolute URL under the WHATWG URL grammar,
/// which means it needs a scheme: `example.com` is rejected while
/// `https://example.com` is accepted. Parse failures become an
/// `url_invalid` error.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_url;
///
/// assert!(validate_url("https://bank.example/statements?month=3").is_ok());
/// assert_eq!(validate_url("example.com").unwrap_err().code, "url_invalid");
/// ```
pub fn validate_url<I: AsInput + ?Sized>(value: &I) -> ValidationResult {
    let Some(text) = value.text().filter(|text| !text.is_empty()) else {
        return Err(ValidationError::required("URL is required"));
    };

    match url::Url::parse(&text) {
        Ok(_) => Ok(()),
        Err(parse_error) => Err(ValidationError::new("url_invalid", "Please enter a valid URL")
            .with_param("reason", parse_error.to_string())),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last+tag@sub.example.co.uk")]
    #[case("a@b.c")]
    #[case("weird!#$%@domain.io")]
    fn test_email_valid(#[case] input: &str) {
        assert!(validate_email(input).is_ok());
    }

    #[rstest]
    #[case("invalid")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@example")]
    #[case("user name@example.com")]
    #[case("user@exa mple.com")]
    #[case("user@@example.com")]
    #[case("a@b@c.com")]
    #[case("user@example.")]
    fn test_email_invalid(#[case] input: &str) {
        let error = validate_email(input).unwrap_err();
        assert_eq!(error.code, "email_invalid");
        assert_eq!(error.message, "Please enter a valid email address");
    }

    #[test]
    fn test_email_required() {
        assert_eq!(validate_email("").unwrap_err().message, "Email is required");
        assert!(validate_email(&json!(null)).unwrap_err().is("required"));
        assert!(validate_email(&None::<String>).unwrap_err().is("required"));
    }

    #[rstest]
    #[case("http://example.com")]
    #[case("https://example.com/path?q=1#frag")]
    #[case("ftp://files.example.com")]
    #[case("mailto:someone@example.com")]
    #[case("http://localhost:8080")]
    fn test_url_valid(#[case] input: &str) {
        assert!(validate_url(input).is_ok());
    }

    #[rstest]
    #[case("example.com")]
    #[case("not a url")]
    #[case("http://")]
    #[case("://missing-scheme.com")]
    #[case("http://exa mple.com")]
    fn test_url_invalid(#[case] input: &str) {
        let error = validate_url(input).unwrap_err();
        assert_eq!(error.code, "url_invalid");
        assert!(error.param("reason").is_some());
    }

    #[test]
    fn test_url_required() {
        assert_eq!(validate_url("").unwrap_err().message, "URL is required");
    }
}
