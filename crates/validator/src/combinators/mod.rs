//! Combinators that run validators over fields and whole forms.
//!
//! - [`validate_field`]: ordered rules for one value, first failure wins
//! - [`validate_form`]: every field of a [`FormSchema`], all failures kept
//!
//! # Examples
//!
//! ```
//! use hearth_validator::combinators::{FormSchema, validate_form};
//! use hearth_validator::rules;
//! use hearth_validator::rules::{money, required};
//! use hearth_validator::validators::MoneyBounds;
//! use serde_json::json;
//!
//! let schema = FormSchema::new()
//!     .field("payee", rules![required("Payee")])
//!     .field("amount", rules![money(MoneyBounds::at_least(0.01))]);
//!
//! let report = validate_form(&json!({ "payee": "Rent", "amount": "950.00" }), &schema);
//! assert!(report.is_valid());
//! ```

pub mod field;
pub mod form;
pub mod schema;

pub use field::validate_field;
pub use form::{FormReport, validate_form};
pub use schema::{FormData, FormSchema};
