//! Rule factories for form schemas.
//!
//! Each factory adapts one validator into a [`BoxedRule`]. Validators that
//! return a parsed value (money, date, percentage) are reduced to pass/fail
//! here; call the validator directly when the parsed value is needed.
//!
//! # Examples
//!
//! ```
//! use hearth_validator::rules;
//! use hearth_validator::rules::{max_length, required, username};
//! use hearth_validator::combinators::validate_field;
//! use serde_json::json;
//!
//! let chain = rules![required("Username"), username(), max_length("Username", 16)];
//! assert!(validate_field(&json!("penny_42"), &chain).is_ok());
//! ```

use crate::foundation::{BoxedRule, FieldValue, ValidationResult, rule};
use crate::validators::{
    MoneyBounds, validate_credit_card, validate_date, validate_email, validate_iban,
    validate_max_length, validate_min_length, validate_money, validate_password,
    validate_percentage, validate_phone, validate_required, validate_url, validate_username,
};

// ============================================================================
// INTO RULE
// ============================================================================

/// Marker for plain functions and closures.
#[doc(hidden)]
pub struct FnRule;

/// Marker for values that are already boxed.
#[doc(hidden)]
pub struct Boxed;

/// Anything that can become a [`BoxedRule`].
///
/// Implemented for [`BoxedRule`] itself and for any
/// `Fn(&FieldValue) -> ValidationResult`. The marker parameter keeps the
/// two implementations apart and is always inferred.
pub trait IntoRule<Marker> {
    fn into_rule(self) -> BoxedRule;
}

impl<F> IntoRule<FnRule> for F
where
    F: Fn(&FieldValue) -> ValidationResult + Send + Sync + 'static,
{
    fn into_rule(self) -> BoxedRule {
        rule(self)
    }
}

impl IntoRule<Boxed> for BoxedRule {
    fn into_rule(self) -> BoxedRule {
        self
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Field must be present and non-empty; `field_name` is used in the message.
pub fn required(field_name: impl Into<String>) -> BoxedRule {
    let field_name = field_name.into();
    rule(move |value| validate_required(value, &field_name))
}

/// Field must hold at least `min` characters.
pub fn min_length(field_name: impl Into<String>, min: usize) -> BoxedRule {
    let field_name = field_name.into();
    rule(move |value| validate_min_length(value, min, &field_name))
}

/// Field may hold at most `max` characters.
pub fn max_length(field_name: impl Into<String>, max: usize) -> BoxedRule {
    let field_name = field_name.into();
    rule(move |value| validate_max_length(value, max, &field_name))
}

pub fn email() -> BoxedRule {
    rule(validate_email)
}

pub fn password() -> BoxedRule {
    rule(validate_password)
}

/// Monetary amount within `bounds`, at most two decimal places.
pub fn money(bounds: MoneyBounds) -> BoxedRule {
    rule(move |value| validate_money(value, bounds).map(|_amount| ()))
}

pub fn date() -> BoxedRule {
    rule(|value| validate_date(value).map(|_date| ()))
}

pub fn url() -> BoxedRule {
    rule(validate_url)
}

pub fn phone() -> BoxedRule {
    rule(validate_phone)
}

pub fn username() -> BoxedRule {
    rule(validate_username)
}

/// Number between 0 and 100 inclusive.
pub fn percentage() -> BoxedRule {
    rule(|value| validate_percentage(value).map(|_percentage| ()))
}

pub fn iban() -> BoxedRule {
    rule(validate_iban)
}

/// Card number of 13 to 19 digits passing the Luhn checksum.
pub fn credit_card() -> BoxedRule {
    rule(validate_credit_card)
}

// ============================================================================
// TESTS
// ============================================================================
