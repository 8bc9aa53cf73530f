//! Serializable view of a single validation result.
//!
//! UI and HTTP layers consume results as `{valid, error, requirements, value}`
//! objects. [`ValidationReport`] is that shape, built from any
//! [`ValidationResult`] whose value serializes.

use serde::Serialize;

use crate::foundation::ValidationResult;

/// Flattened, JSON-friendly form of a [`ValidationResult`].
///
/// `error` is present iff `valid` is false, `requirements` only when the
/// failure listed any, and `value` only for successful parses that carry a
/// value.
///
/// # Examples
///
/// ```
/// use hearth_validator::foundation::ValidationReport;
/// use hearth_validator::validators::{validate_money, MoneyBounds};
///
/// let report = ValidationReport::from_result(&validate_money("12.34", MoneyBounds::default()));
/// assert_eq!(
///     serde_json::to_string(&report).unwrap(),
///     r#"{"valid":true,"value":12.34}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the input passed.
    pub valid: bool,

    /// Failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Unmet requirements, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,

    /// Parsed value of a successful result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl ValidationReport {
    /// Builds the report for a result.
    pub fn from_result<T: Serialize>(result: &ValidationResult<T>) -> Self {
        match result {
            Ok(value) => Self {
                valid: true,
                error: None,
                requirements: Vec::new(),
                value: serde_json::to_value(value)
                    .ok()
                    .filter(|value| !value.is_null()),
            },
            Err(error) => Self {
                valid: false,
                error: Some(error.message.to_string()),
                requirements: error.requirements.iter().map(ToString::to_string).collect(),
                value: None,
            },
        }
    }
}

impl<T: Serialize> From<ValidationResult<T>> for ValidationReport {
    fn from(result: ValidationResult<T>) -> Self {
        Self::from_result(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn unit_success_has_no_value() {
        let report = ValidationReport::from_result(&Ok::<(), ValidationError>(()));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, json!({ "valid": true }));
    }

    #[test]
    fn failure_carries_message_and_requirements() {
        let error = ValidationError::new("password_weak", "weak")
            .with_requirements(["One number"]);
        let report = ValidationReport::from(Err::<(), _>(error));
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "valid": false, "error": "weak", "requirements": ["One number"] })
        );
    }

    #[test]
    fn dates_serialize_as_iso() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let report = ValidationReport::from_result(&Ok::<_, ValidationError>(date));
        assert_eq!(report.value, Some(json!("2024-02-29")));
    }
}
