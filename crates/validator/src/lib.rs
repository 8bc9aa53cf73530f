//! # hearth-validator
//!
//! Field and form validation for the Hearth household budget app.
//!
//! ## Quick Start
//!
//! ```
//! use hearth_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = schema! {
//!     "email" => [required("Email"), email()],
//!     "password" => [password()],
//!     "budget" => [money(MoneyBounds::new(0.0, 10_000.0))],
//! };
//!
//! let report = validate_form(
//!     &json!({ "email": "sam@example.com", "password": "weak", "budget": "250.00" }),
//!     &schema,
//! );
//!
//! assert!(!report.is_valid());
//! assert!(report.error("password").is_some());
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: one function per input type, returning a
//!   [`ValidationResult`](foundation::ValidationResult)
//! - [`combinators`]: [`validate_field`](combinators::validate_field) runs a
//!   rule chain and stops at the first failure,
//!   [`validate_form`](combinators::validate_form) checks every field
//! - [`rules`]: validators packaged as boxed [`Rule`](foundation::Rule)s
//! - [`config`]: forms declared as JSON
//!
//! Validation never panics and never logs above `debug`; install a
//! `tracing` subscriber to see per-field failures.

// ValidationError is the error type of every validator; boxing it would add
// an allocation to each failing check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;
