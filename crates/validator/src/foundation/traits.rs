//! The rule abstraction used by the combinators.
//!
//! A [`Rule`] maps one raw field value to a [`ValidationResult`]. Any
//! `Fn(&FieldValue) -> ValidationResult` is a rule, so plain validator
//! functions and closures compose without wrappers.

use crate::foundation::{FieldValue, ValidationResult};

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A single validation step for one form field.
///
/// Rules are stateless and deterministic: the same input always produces
/// the same result, and checking never panics.
///
/// # Examples
///
/// ```
/// use hearth_validator::foundation::{FieldValue, Rule, ValidationError, ValidationResult};
/// use serde_json::json;
///
/// struct NoAdmin;
///
/// impl Rule for NoAdmin {
///     fn check(&self, value: &FieldValue) -> ValidationResult {
///         if value == "admin" {
///             Err(ValidationError::new("reserved", "This name is reserved"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoAdmin.check(&json!("alice")).is_ok());
/// assert!(NoAdmin.check(&json!("admin")).is_err());
/// ```
pub trait Rule: Send + Sync {
    /// Checks one field value.
    fn check(&self, value: &FieldValue) -> ValidationResult;
}

impl<F> Rule for F
where
    F: Fn(&FieldValue) -> ValidationResult + Send + Sync,
{
    fn check(&self, value: &FieldValue) -> ValidationResult {
        self(value)
    }
}

/// An owned, type-erased rule, as stored in a form schema.
pub type BoxedRule = Box<dyn Rule>;

/// Boxes a closure or function into a [`BoxedRule`].
///
/// Taking the `Fn` bound directly lets closure parameter types and the
/// generic input of validator functions be inferred.
///
/// ```
/// use hearth_validator::foundation::{rule, Rule};
/// use hearth_validator::validators::{validate_email, validate_required};
/// use serde_json::json;
///
/// let email = rule(validate_email);
/// let name = rule(|v| validate_required(v, "Name"));
///
/// assert!(email.check(&json!("a@b.co")).is_ok());
/// assert!(name.check(&json!("")).is_err());
/// ```
pub fn rule<F>(f: F) -> BoxedRule
where
    F: Fn(&FieldValue) -> ValidationResult + Send + Sync + 'static,
{
    Box::new(f)
}

// ============================================================================
// TESTS
// ============================================================================
