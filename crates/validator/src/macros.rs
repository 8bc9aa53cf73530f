//! Macros for building rule chains and form schemas with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rules!`]: Build a `Vec<BoxedRule>` from boxed rules, function items, or closures
//! - [`schema!`]: Build a [`FormSchema`](crate::combinators::FormSchema) from `name => [rules]`
//!
//! # Examples
//!
//! ```
//! use hearth_validator::{rules, schema};
//! use hearth_validator::rules::{email, required};
//! use hearth_validator::validators::validate_phone;
//!
//! let schema = schema! {
//!     "email" => [required("Email"), email()],
//!     "phone" => [validate_phone],
//! };
//!
//! assert_eq!(schema.len(), 2);
//! ```

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds an ordered `Vec<BoxedRule>`.
///
/// Each element may be an already boxed rule (such as the factories in
/// [`rules`](crate::rules)), a validator function item, or a closure with
/// a typed `&FieldValue` parameter.
///
/// ```
/// use hearth_validator::rules;
/// use hearth_validator::foundation::FieldValue;
/// use hearth_validator::rules::required;
/// use hearth_validator::validators::{validate_email, validate_max_length};
///
/// let chain = rules![
///     required("Email"),
///     validate_email,
///     |v: &FieldValue| validate_max_length(v, 64, "Email"),
/// ];
/// assert_eq!(chain.len(), 3);
///
/// let empty = rules![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<$crate::foundation::BoxedRule>::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![$($crate::rules::IntoRule::into_rule($rule)),+]
    };
}

// ============================================================================
// SCHEMA MACRO
// ============================================================================

/// Builds a [`FormSchema`](crate::combinators::FormSchema) in field order.
///
/// Each entry is `name => [rules...]`, where the bracketed list takes the
/// same elements as [`rules!`].
#[macro_export]
macro_rules! schema {
    ($($name:expr => [$($rule:expr),* $(,)?]),* $(,)?) => {
        $crate::combinators::FormSchema::new()
            $(.field($name, $crate::rules![$($rule),*]))*
    };
}
