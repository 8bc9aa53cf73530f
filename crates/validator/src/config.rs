//! Declarative form definitions.
//!
//! A [`FormConfig`] describes a form as data, so the HTTP layer and the UI
//! can load one shared definition instead of each building rules in code:
//!
//! ```json
//! {
//!   "fields": {
//!     "email":  [{ "rule": "required", "label": "Email" }, { "rule": "email" }],
//!     "amount": [{ "rule": "money", "min": 1, "max": 500 }]
//!   }
//! }
//! ```
//!
//! Building the schema checks the definition once; the resulting
//! [`FormSchema`] never fails at validation time for config reasons.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combinators::FormSchema;
use crate::foundation::BoxedRule;
use crate::rules;
use crate::validators::{DEFAULT_FIELD_NAME, MoneyBounds};

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Problems found while loading or building a form definition.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The definition is not valid JSON or does not match the expected shape
    #[error("Failed to parse form definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field name is empty or only whitespace
    #[error("Form field names must not be empty")]
    EmptyFieldName,

    /// Money bounds where `min > max` or `min` is not finite
    #[error("Invalid money bounds for field {field}: min {min}, max {max}")]
    InvalidMoneyBounds {
        /// Field the rule belongs to
        field: String,
        min: f64,
        max: f64,
    },

    /// A `max_length` rule allowing zero characters
    #[error("Invalid length bounds for field {field}: max_length must be at least 1")]
    InvalidLengthBounds {
        /// Field the rule belongs to
        field: String,
    },
}

// ============================================================================
// RULE CONFIG
// ============================================================================

/// One rule in a field's chain, tagged by `"rule"`.
///
/// # Examples
///
/// ```
/// use hearth_validator::config::RuleConfig;
///
/// let rule: RuleConfig = serde_json::from_str(r#"{"rule": "min_length", "min": 3}"#).unwrap();
/// assert_eq!(rule, RuleConfig::MinLength { min: 3, label: None });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleConfig {
    Required {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Email,
    Password,
    Money {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Date,
    MinLength {
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    MaxLength {
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Url,
    Phone,
    Username,
    Percentage,
    Iban,
    CreditCard,
}

fn label_or_default(label: Option<&str>) -> String {
    label.unwrap_or(DEFAULT_FIELD_NAME).to_owned()
}

impl RuleConfig {
    /// Builds the rule for `field`, checking its parameters.
    pub fn build(&self, field: &str) -> Result<BoxedRule, ConfigError> {
        let rule = match self {
            Self::Required { label } => rules::required(label_or_default(label.as_deref())),
            Self::Email => rules::email(),
            Self::Password => rules::password(),
            Self::Money { min, max } => {
                let defaults = MoneyBounds::default();
                let bounds = MoneyBounds::new(
                    min.unwrap_or(defaults.min),
                    max.unwrap_or(defaults.max),
                );
                if !bounds.is_consistent() {
                    return Err(ConfigError::InvalidMoneyBounds {
                        field: field.to_owned(),
                        min: bounds.min,
                        max: bounds.max,
                    });
                }
                rules::money(bounds)
            }
            Self::Date => rules::date(),
            Self::MinLength { min, label } => {
                rules::min_length(label_or_default(label.as_deref()), *min)
            }
            Self::MaxLength { max, label } => {
                if *max == 0 {
                    return Err(ConfigError::InvalidLengthBounds {
                        field: field.to_owned(),
                    });
                }
                rules::max_length(label_or_default(label.as_deref()), *max)
            }
            Self::Url => rules::url(),
            Self::Phone => rules::phone(),
            Self::Username => rules::username(),
            Self::Percentage => rules::percentage(),
            Self::Iban => rules::iban(),
            Self::CreditCard => rules::credit_card(),
        };
        Ok(rule)
    }
}

// ============================================================================
// FORM CONFIG
// ============================================================================

/// A whole form: field names, in order, mapped to their rule chains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    pub fields: IndexMap<String, Vec<RuleConfig>>,
}

impl FormConfig {
    /// Parses a definition from JSON text.
    ///
    /// ```
    /// use hearth_validator::config::FormConfig;
    /// use hearth_validator::combinators::validate_form;
    /// use serde_json::json;
    ///
    /// let config = FormConfig::from_json_str(
    ///     r#"{"fields": {"email": [{"rule": "required", "label": "Email"}, {"rule": "email"}]}}"#,
    /// )?;
    /// let schema = config.build_schema()?;
    ///
    /// let report = validate_form(&json!({ "email": "" }), &schema);
    /// assert_eq!(report.error("email").unwrap().message, "Email is required");
    /// # Ok::<(), hearth_validator::config::ConfigError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a definition from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Builds a [`FormSchema`], keeping field order.
    pub fn build_schema(&self) -> Result<FormSchema, ConfigError> {
        let mut schema = FormSchema::new();
        for (field, chain) in &self.fields {
            if field.trim().is_empty() {
                return Err(ConfigError::EmptyFieldName);
            }
            let rules = chain
                .iter()
                .map(|rule| rule.build(field))
                .collect::<Result<Vec<_>, _>>()?;
            schema.insert(field.clone(), rules);
        }

        tracing::debug!(fields = schema.len(), "built form schema from config");
        Ok(schema)
    }

    /// Consuming form of [`build_schema`](Self::build_schema).
    pub fn into_schema(self) -> Result<FormSchema, ConfigError> {
        self.build_schema()
    }
}

impl TryFrom<FormConfig> for FormSchema {
    type Error = ConfigError;

    fn try_from(config: FormConfig) -> Result<Self, Self::Error> {
        config.into_schema()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::validate_form;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_all_rule_kinds() {
        let config = FormConfig::from_value(json!({
            "fields": {
                "everything": [
                    { "rule": "required" },
                    { "rule": "email" },
                    { "rule": "password" },
                    { "rule": "money", "max": 10 },
                    { "rule": "date" },
                    { "rule": "min_length", "min": 1, "label": "X" },
                    { "rule": "max_length", "max": 9 },
                    { "rule": "url" },
                    { "rule": "phone" },
                    { "rule": "username" },
                    { "rule": "percentage" },
                    { "rule": "iban" },
                    { "rule": "credit_card" }
                ]
            }
        }))
        .unwrap();

        let chain = &config.fields["everything"];
        assert_eq!(chain.len(), 13);
        assert_eq!(chain[0], RuleConfig::Required { label: None });
        assert_eq!(
            chain[3],
            RuleConfig::Money {
                min: None,
                max: Some(10.0)
            }
        );
        assert_eq!(config.build_schema().unwrap().len(), 1);
    }

    #[test]
    fn test_default_label() {
        let schema = FormConfig::from_value(json!({
            "fields": { "note": [{ "rule": "required" }] }
        }))
        .unwrap()
        .into_schema()
        .unwrap();

        let report = validate_form(&json!({}), &schema);
        assert_eq!(
            report.error("note").unwrap().message,
            "This field is required"
        );
    }

    #[test]
    fn test_field_order_preserved() {
        let config = FormConfig::from_json_str(
            r#"{"fields": {"z": [{"rule": "required"}], "a": [{"rule": "required"}]}}"#,
        )
        .unwrap();
        let schema = config.build_schema().unwrap();
        assert_eq!(schema.field_names().collect::<Vec<_>>(), ["z", "a"]);
    }

    #[test]
    fn test_unknown_rule_is_parse_error() {
        let error = FormConfig::from_json_str(r#"{"fields": {"a": [{"rule": "zip_code"}]}}"#)
            .unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_required_parameter_is_parse_error() {
        let error = FormConfig::from_value(json!({
            "fields": { "a": [{ "rule": "min_length" }] }
        }))
        .unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_field_name() {
        let config = FormConfig::from_value(json!({ "fields": { "  ": [] } })).unwrap();
        assert!(matches!(
            config.build_schema(),
            Err(ConfigError::EmptyFieldName)
        ));
    }

    #[test]
    fn test_inverted_money_bounds() {
        let config = FormConfig::from_value(json!({
            "fields": { "amount": [{ "rule": "money", "min": 100, "max": 5 }] }
        }))
        .unwrap();

        match config.build_schema() {
            Err(ConfigError::InvalidMoneyBounds { field, min, max }) => {
                assert_eq!(field, "amount");
                assert_eq!((min, max), (100.0, 5.0));
            }
            other => panic!("expected InvalidMoneyBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_max_length() {
        let config = FormConfig::from_value(json!({
            "fields": { "code": [{ "rule": "max_length", "max": 0 }] }
        }))
        .unwrap();
        assert!(matches!(
            config.build_schema(),
            Err(ConfigError::InvalidLengthBounds { field }) if field == "code"
        ));
    }

    #[test]
    fn test_serializes_back_to_same_shape() {
        let config = FormConfig {
            fields: [(
                "amount".to_string(),
                vec![
                    RuleConfig::Required {
                        label: Some("Amount".into()),
                    },
                    RuleConfig::Money {
                        min: Some(1.0),
                        max: None,
                    },
                ],
            )]
            .into_iter()
            .collect(),
        };

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "fields": {
                    "amount": [
                        { "rule": "required", "label": "Amount" },
                        { "rule": "money", "min": 1.0 }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_try_from() {
        let schema = FormSchema::try_from(FormConfig::default()).unwrap();
        assert!(schema.is_empty());
    }
}
