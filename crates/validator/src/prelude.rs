//! Prelude module for convenient imports.
//!
//! Provides a single `use hearth_validator::prelude::*;` import that brings
//! in the error types, every validator, the rule factories, and the form
//! combinators.
//!
//! # Examples
//!
//! ```
//! use hearth_validator::prelude::*;
//!
//! assert!(validate_email("sam@example.com").is_ok());
//! assert_eq!(password_strength("Password123!").label, StrengthLabel::Strong);
//!
//! let chain = rules![required("Name"), min_length("Name", 2)];
//! assert!(validate_field(&FieldValue::from("Sam"), &chain).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, reports
// ============================================================================

pub use crate::foundation::{
    AsInput, BoxedRule, FieldValue, Rule, ValidationError, ValidationReport, ValidationResult, rule,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    MoneyBounds, PasswordStrength, StrengthColor, StrengthLabel, luhn_checksum_valid, parse_date,
    password_strength, validate_credit_card, validate_date, validate_date_range, validate_email,
    validate_iban, validate_max_length, validate_min_length, validate_money, validate_password,
    validate_percentage, validate_phone, validate_required, validate_url, validate_username,
};

// ============================================================================
// RULES & COMBINATORS
// ============================================================================

pub use crate::combinators::{FormData, FormReport, FormSchema, validate_field, validate_form};
pub use crate::rules::{
    IntoRule, credit_card, date, email, iban, max_length, min_length, money, password, percentage,
    phone, required, url, username,
};
pub use crate::{rules, schema};

// ============================================================================
// CONFIG
// ============================================================================

pub use crate::config::{ConfigError, FormConfig, RuleConfig};
