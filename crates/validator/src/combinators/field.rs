//! Field combinator: runs a list of rules against one value.
//!
//! Rules run in order and the first failure wins. Later rules are never
//! invoked, so a `required` rule placed first keeps format rules from
//! reporting noise on an empty input.

use crate::foundation::{BoxedRule, FieldValue, ValidationResult};

// ============================================================================
// VALIDATE FIELD
// ============================================================================

/// Validates a single value against an ordered list of rules.
///
/// Returns the first error produced, or `Ok(())` when every rule passes.
/// An empty rule list always passes.
///
/// # Examples
///
/// ```
/// use hearth_validator::combinators::validate_field;
/// use hearth_validator::foundation::rule;
/// use hearth_validator::validators::{validate_email, validate_required};
/// use serde_json::json;
///
/// let rules = vec![
///     rule(|v| validate_required(v, "Email")),
///     rule(validate_email),
/// ];
///
/// assert!(validate_field(&json!("sam@example.com"), &rules).is_ok());
/// assert_eq!(
///     validate_field(&json!(""), &rules).unwrap_err().message,
///     "Email is required"
/// );
/// ```
pub fn validate_field(value: &FieldValue, rules: &[BoxedRule]) -> ValidationResult {
    for (index, rule) in rules.iter().enumerate() {
        if let Err(error) = rule.check(value) {
            tracing::trace!(
                rule = index,
                code = %error.code,
                skipped = rules.len() - index - 1,
                "rule failed, skipping remaining rules"
            );
            return Err(error);
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
