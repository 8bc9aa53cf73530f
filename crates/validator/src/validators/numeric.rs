//! Money and percentage validators.
//!
//! Both accept either native numbers or their text form and return the
//! parsed `f64` on success.

use serde::Deserialize;

use crate::foundation::error::Bound;
use crate::foundation::{AsInput, ValidationError, ValidationResult};

/// Maximum number of digits allowed after the decimal point in an amount.
pub const MONEY_DECIMAL_PLACES: usize = 2;

// ============================================================================
// MONEY BOUNDS
// ============================================================================

/// Inclusive bounds for [`validate_money`].
///
/// Defaults to `min = 0` and no upper limit. Deserializing fills missing
/// fields with those defaults.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::MoneyBounds;
///
/// let bounds: MoneyBounds = serde_json::from_str(r#"{"max": 500}"#).unwrap();
/// assert_eq!(bounds, MoneyBounds::new(0.0, 500.0));
/// assert_eq!(MoneyBounds::default().max, f64::INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoneyBounds {
    /// Smallest accepted amount.
    pub min: f64,
    /// Largest accepted amount.
    pub max: f64,
}

impl MoneyBounds {
    /// Creates bounds accepting `min ..= max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Accepts any amount of at least `min`.
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Accepts any amount from zero up to `max`.
    #[must_use]
    pub const fn at_most(max: f64) -> Self {
        Self::new(0.0, max)
    }

    /// Returns true when `min <= max` and `min` is finite.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let Self { min, max } = *self;
        // `min <= max` is false when `max` is NaN
        min.is_finite() && min <= max
    }
}

impl Default for MoneyBounds {
    fn default() -> Self {
        Self::at_least(0.0)
    }
}

// ============================================================================
// PARSING HELPERS
// ============================================================================

/// Parses a finite number from the input, preferring its native numeric form.
fn parse_finite<I: AsInput + ?Sized>(value: &I) -> Option<f64> {
    let number = match value.number() {
        Some(number) => number,
        None => value.text()?.trim().parse::<f64>().ok()?,
    };
    number.is_finite().then_some(number)
}

/// Counts the digits after the decimal point of the written value.
///
/// An exponent moves the point before counting: `1.234e2` has one place,
/// `1e-5` has five.
fn decimal_places(text: &str) -> usize {
    let text = text.trim();
    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<isize>().unwrap_or_default()),
        None => (text, 0),
    };
    let fraction = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());
    fraction.saturating_add_signed(exponent.saturating_neg())
}

// ============================================================================
// MONEY
// ============================================================================

/// Validates a monetary amount and returns it parsed.
///
/// Checks run in this order: required, numeric, at least `min`, at most
/// `max`, at most two decimal places.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::{validate_money, MoneyBounds};
///
/// assert_eq!(validate_money("12.34", MoneyBounds::new(0.0, 100.0)), Ok(12.34));
/// assert_eq!(
///     validate_money("12.345", MoneyBounds::default()).unwrap_err().code,
///     "money_decimals"
/// );
/// assert_eq!(
///     validate_money("-1", MoneyBounds::default()).unwrap_err().message,
///     "Amount must be at least 0"
/// );
/// ```
pub fn validate_money<I: AsInput + ?Sized>(
    value: &I,
    bounds: MoneyBounds,
) -> ValidationResult<f64> {
    let Some(text) = value.text().filter(|text| !text.is_empty()) else {
        return Err(ValidationError::required("Amount is required"));
    };

    let Some(amount) = parse_finite(value) else {
        return Err(ValidationError::new(
            "money_not_number",
            "Please enter a valid number",
        ));
    };

    if amount < bounds.min {
        let min = Bound(bounds.min).to_string();
        return Err(ValidationError::new(
            "money_below_min",
            format!("Amount must be at least {min}"),
        )
        .with_param("min", min));
    }

    if amount > bounds.max {
        let max = Bound(bounds.max).to_string();
        return Err(ValidationError::new(
            "money_above_max",
            format!("Amount must be at most {max}"),
        )
        .with_param("max", max));
    }

    if decimal_places(&text) > MONEY_DECIMAL_PLACES {
        return Err(ValidationError::new(
            "money_decimals",
            "Amount can have at most 2 decimal places",
        ));
    }

    Ok(amount)
}

// ============================================================================
// PERCENTAGE
// ============================================================================

/// Validates a percentage in `0 ..= 100` and returns it parsed.
///
/// An empty input is reported as not a number.
///
/// # Examples
///
/// ```
/// use hearth_validator::validators::validate_percentage;
///
/// assert_eq!(validate_percentage("12.5"), Ok(12.5));
/// assert_eq!(validate_percentage("101").unwrap_err().code, "percentage_out_of_range");
/// assert_eq!(validate_percentage("half").unwrap_err().code, "percentage_not_number");
/// ```
pub fn validate_percentage<I: AsInput + ?Sized>(value: &I) -> ValidationResult<f64> {
    let Some(percentage) = parse_finite(value) else {
        return Err(ValidationError::new(
            "percentage_not_number",
            "Percentage must be a number",
        ));
    };

    if (0.0..=100.0).contains(&percentage) {
        Ok(percentage)
    } else {
        Err(ValidationError::new(
            "percentage_out_of_range",
            "Percentage must be between 0 and 100",
        )
        .with_param("actual", percentage.to_string()))
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

    #[test]
    fn test_money_parses_value() {
        assert_eq!(
            validate_money("12.34", MoneyBounds::new(0.0, 100.0)),
            Ok(12.34)
        );
        assert_eq!(validate_money(&json!(7), MoneyBounds::default()), Ok(7.0));
        assert_eq!(validate_money(" 3.5 ", MoneyBounds::default()), Ok(3.5));
        assert_eq!(
            validate_money(&19.99_f64, MoneyBounds::default()),
            Ok(19.99)
        );
        assert_eq!(
            validate_money(&12.34_f32, MoneyBounds::default()),
            Ok(12.34)
        );
    }

    #[rstest]
    #[case(json!(""))]
    #[case(json!(null))]
    fn test_money_required(#[case] input: serde_json::Value) {
        let error = validate_money(&input, MoneyBounds::default()).unwrap_err();
        assert_eq!(error.code, "required");
        assert_eq!(error.message, "Amount is required");
    }

    #[rstest]
    #[case("abc")]
    #[case("12abc")]
    #[case("1,000")]
    #[case("NaN")]
    #[case("inf")]
    #[case("   ")]
    fn test_money_not_a_number(#[case] input: &str) {
        assert_eq!(
            validate_money(input, MoneyBounds::default()).unwrap_err().code,
            "money_not_number"
        );
    }

    #[test]
    fn test_money_bounds_in_messages() {
        let bounds = MoneyBounds::new(5.0, 100.0);

        let below = validate_money("4.99", bounds).unwrap_err();
        assert_eq!(below.code, "money_below_min");
        assert_eq!(below.message, "Amount must be at least 5");
        assert_eq!(below.param("min"), Some("5"));

        let above = validate_money("100.01", bounds).unwrap_err();
        assert_eq!(above.code, "money_above_max");
        assert_eq!(above.message, "Amount must be at most 100");

        assert_eq!(validate_money("5", bounds), Ok(5.0));
        assert_eq!(validate_money("100", bounds), Ok(100.0));
    }

    #[test]
    fn test_money_checks_range_before_decimals() {
        let error = validate_money("150.999", MoneyBounds::at_most(100.0)).unwrap_err();
        assert_eq!(error.code, "money_above_max");
    }

    #[rstest]
    #[case("12.345")]
    #[case("0.001")]
    #[case("1.2345e1")]
    #[case("1e-5")]
    #[case("1.5e-3")]
    #[case("5E-3")]
    fn test_money_too_many_decimals(#[case] input: &str) {
        let error = validate_money(input, MoneyBounds::default()).unwrap_err();
        assert_eq!(error.code, "money_decimals");
        assert_eq!(error.message, "Amount can have at most 2 decimal places");
    }

    #[rstest]
    #[case("1.234e2", 123.4)]
    #[case("1.5e1", 15.0)]
    #[case("2E+2", 200.0)]
    #[case("1.2e-1", 0.12)]
    fn test_money_exponent_shifts_decimals(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(validate_money(input, MoneyBounds::default()), Ok(expected));
    }

    #[test]
    fn test_money_native_number_decimals() {
        let bounds = MoneyBounds::default();
        assert!(validate_money(&json!(12.345), bounds).is_err());
        assert_eq!(validate_money(&json!(12.3), bounds), Ok(12.3));

        let tiny = validate_money(&json!(0.000_000_1), bounds).unwrap_err();
        assert_eq!(tiny.code, "money_decimals");
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places("12"), 0);
        assert_eq!(decimal_places("12."), 0);
        assert_eq!(decimal_places("12.3"), 1);
        assert_eq!(decimal_places("12.30"), 2);
        assert_eq!(decimal_places("1.25E3"), 0);
        assert_eq!(decimal_places("1.234e2"), 1);
        assert_eq!(decimal_places("1e-5"), 5);
        assert_eq!(decimal_places("1.5e-3"), 4);
        assert_eq!(decimal_places("12e+1"), 0);
    }

    #[test]
    fn test_bounds_defaults_and_consistency() {
        let bounds = MoneyBounds::default();
        assert_eq!(bounds.min, 0.0);
        assert!(bounds.max.is_infinite());
        assert!(bounds.is_consistent());
        assert!(!MoneyBounds::new(10.0, 1.0).is_consistent());
        assert!(!MoneyBounds::new(f64::NEG_INFINITY, 1.0).is_consistent());
        assert!(!MoneyBounds::new(0.0, f64::NAN).is_consistent());
    }

    #[rstest]
    #[case("0", 0.0)]
    #[case("100", 100.0)]
    #[case("33.3", 33.3)]
    #[case(" 50 ", 50.0)]
    fn test_percentage_valid(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(validate_percentage(input), Ok(expected));
    }

    #[rstest]
    #[case("-0.1")]
    #[case("100.5")]
    #[case("1000")]
    fn test_percentage_out_of_range(#[case] input: &str) {
        let error = validate_percentage(input).unwrap_err();
        assert_eq!(error.code, "percentage_out_of_range");
        assert_eq!(error.message, "Percentage must be between 0 and 100");
    }

    #[test]
    fn test_percentage_not_number() {
        for input in [json!(""), json!(null), json!("ten")] {
            let error = validate_percentage(&input).unwrap_err();
            assert!(error.is("percentage_not_number"));
        }
        assert_eq!(validate_percentage(&json!(25)), Ok(25.0));
    }
}
