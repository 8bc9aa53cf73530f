//! Core validation types and traits
//!
//! This module contains the building blocks every validator and combinator
//! shares:
//!
//! - **Results**: [`ValidationResult`], [`ValidationError`], [`ValidationReport`]
//! - **Input**: [`AsInput`], [`FieldValue`]
//! - **Rules**: [`Rule`], [`BoxedRule`], [`rule`]
//!
//! # Results
//!
//! A successful validation returns `Ok` with the parsed value, if the
//! validator parses anything, and `()` otherwise. A failure returns
//! `Err(ValidationError)`; a value is never reported alongside a failure.
//!
//! ```
//! use hearth_validator::foundation::ValidationResult;
//! use hearth_validator::validators::{validate_email, validate_percentage};
//!
//! let ok: ValidationResult = validate_email("sam@example.com");
//! assert!(ok.is_ok());
//!
//! let parsed: ValidationResult<f64> = validate_percentage("42.5");
//! assert_eq!(parsed, Ok(42.5));
//! ```

pub mod error;
pub mod input;
pub mod report;
pub mod traits;

pub use error::ValidationError;
pub use input::{AsInput, FieldValue};
pub use report::ValidationReport;
pub use traits::{BoxedRule, Rule, rule};

/// The outcome of a validator: the parsed value on success.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;
