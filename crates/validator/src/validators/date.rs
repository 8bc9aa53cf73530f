//! Calendar date validators.
//!
//! Accepted formats, tried in order:
//!
//! - `YYYY-MM-DD`
//! - `MM/DD/YYYY`
//! - RFC 3339 date-time (`2024-03-01T10:00:00Z`, `2024-03-01T10:00:00+02:00`)
//! - `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds and no offset
//!
//! Surrounding whitespace is ignored and date-times reduce to their
//! calendar date (the local date written in the string).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::foundation::{AsInput, ValidationError, ValidationResult};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a calendar date using the fixed grammar above.
///
/// Returns `None` for anything else, including impossible dates such as
/// `2023-02-29`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
                .ok()
                .map(|datetime| datetime.date())
        })
}

fn parse_input<I: AsInput + ?Sized>(value: &I) -> Option<NaiveDate> {
    value.text().as_deref().and_then(parse_date)
}

/// Validates a calendar date and returns it parsed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hearth_validator::validators::validate_date;
///
/// assert_eq!(validate_date("2024-02-29"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
/// assert_eq!(validate_date("2023-02-29").unwrap_err().code, "date_invalid");
/// assert_eq!(validate_date("").unwrap_err().code, "required");
/// ```
pub fn validate_date<I: AsInput + ?Sized>(value: &I) -> ValidationResult<NaiveDate> {
    if value.is_empty_input() {
        return Err(ValidationError::required("Date is required"));
    }

    parse_input(value)
        .ok_or_else(|| ValidationError::new("date_invalid", "Please enter a valid date"))
}

/// Validates that two dates parse and that `start` is not after `end`.
///
/// Equal dates are accepted. Failures are checked in order: invalid start,
/// invalid end, start after end.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_date_range;
///
/// assert!(validate_date_range("2024-01-01", "2024-01-31").is_ok());
/// assert_eq!(
///     validate_date_range("2024-02-01", "2024-01-31").unwrap_err().code,
///     "date_range_order"
/// );
/// ```
pub fn validate_date_range<S, E>(start: &S, end: &E) -> ValidationResult
where
    S: AsInput + ?Sized,
    E: AsInput + ?Sized,
{
    let Some(start) = parse_input(start) else {
        return Err(ValidationError::new(
            "date_range_start_invalid",
            "Please enter a valid start date",
        ));
    };

    let Some(end) = parse_input(end) else {
        return Err(ValidationError::new(
            "date_range_end_invalid",
            "Please enter a valid end date",
        ));
    };

    if start > end {
        return Err(ValidationError::new(
            "date_range_order",
            "Start date must be before end date",
        )
        .with_param("start", start.to_string())
        .with_param("end", end.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[rstest]
    #[case("2024-03-15", ymd(2024, 3, 15))]
    #[case(" 2024-03-15 ", ymd(2024, 3, 15))]
    #[case("03/15/2024", ymd(2024, 3, 15))]
    #[case("2024-03-15T23:30:00Z", ymd(2024, 3, 15))]
    #[case("2024-03-15T23:30:00-05:00", ymd(2024, 3, 15))]
    #[case("2024-03-15T08:00:00", ymd(2024, 3, 15))]
    #[case("2024-03-15T08:00:00.250", ymd(2024, 3, 15))]
    fn test_valid_dates(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(validate_date(input), Ok(expected));
    }

    #[rstest]
    #[case("2023-02-29")]
    #[case("2024-13-01")]
    #[case("15/03/2024")]
    #[case("yesterday")]
    #[case("2024-03")]
    #[case("   ")]
    fn test_invalid_dates(#[case] input: &str) {
        let error = validate_date(input).unwrap_err();
        assert_eq!(error.code, "date_invalid");
        assert_eq!(error.message, "Please enter a valid date");
    }

    #[test]
    fn test_required() {
        assert_eq!(validate_date("").unwrap_err().message, "Date is required");
        assert!(validate_date(&json!(null)).unwrap_err().is("required"));
    }

    #[test]
    fn test_range_ok_and_equal_endpoints() {
        assert!(validate_date_range("2024-01-01", "2024-12-31").is_ok());
        assert!(validate_date_range("2024-06-01", "2024-06-01").is_ok());
        let mixed = validate_date_range(&json!("2024-06-01"), "06/02/2024");
        assert!(mixed.is_ok());
    }

    #[test]
    fn test_range_failure_order() {
        let both_bad = validate_date_range("nope", "also nope").unwrap_err();
        assert_eq!(both_bad.code, "date_range_start_invalid");

        let end_bad = validate_date_range("2024-01-01", "").unwrap_err();
        assert_eq!(end_bad.code, "date_range_end_invalid");
        assert_eq!(end_bad.message, "Please enter a valid end date");

        let reversed = validate_date_range("2024-02-01", "2024-01-01").unwrap_err();
        assert_eq!(reversed.code, "date_range_order");
        assert_eq!(reversed.message, "Start date must be before end date");
        assert_eq!(reversed.param("start"), Some("2024-02-01"));
    }
}
