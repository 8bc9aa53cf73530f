//! Built-in validators
//!
//! Every validator is a plain function over any [`AsInput`] value and
//! returns a [`ValidationResult`]. The first failing check determines the
//! error, except for [`validate_password`], which reports every unmet
//! policy rule at once.
//!
//! # Categories
//!
//! - **Identity**: email, password, username, phone
//! - **Money**: amount, percentage, IBAN, credit card
//! - **Dates**: single date, date range
//! - **Generic**: required, minimum and maximum length, URL
//!
//! # Examples
//!
//! ```
//! use hearth_validator::validators::{validate_email, validate_money, MoneyBounds};
//!
//! assert!(validate_email("sam@example.com").is_ok());
//! assert_eq!(validate_money("19.99", MoneyBounds::default()), Ok(19.99));
//! ```
//!
//! [`AsInput`]: crate::foundation::AsInput
//! [`ValidationResult`]: crate::foundation::ValidationResult

pub mod content;
pub mod credit_card;
pub mod date;
pub mod iban;
pub mod length;
pub mod numeric;
pub mod password;
pub mod phone;
pub mod username;

pub use content::{validate_email, validate_url};
pub use credit_card::{luhn_checksum_valid, validate_credit_card};
pub use date::{parse_date, validate_date, validate_date_range};
pub use iban::validate_iban;
pub use length::{DEFAULT_FIELD_NAME, validate_max_length, validate_min_length, validate_required};
pub use numeric::{MoneyBounds, validate_money, validate_percentage};
pub use password::{
    PasswordStrength, StrengthColor, StrengthLabel, password_strength, validate_password,
};
pub use phone::validate_phone;
pub use username::validate_username;
