//! Error type for validation failures
//!
//! Every validator reports failure as a [`ValidationError`]: a stable code
//! for programmatic handling, a human-readable English message, and
//! optional parameters, field name, and requirement list.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages never allocates.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// `Display` renders only the message, which is what a form shows next to
/// the offending input.
///
/// # Examples
///
/// ```
/// use hearth_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("money_below_min", "Amount must be at least 5")
///     .with_param("min", "5");
///
/// assert_eq!(error.to_string(), "Amount must be at least 5");
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "email_invalid", "card_checksum"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Form field the error belongs to, filled in by form validation.
    pub field: Option<Cow<'static, str>>,

    /// Parameters the message was built from, e.g. `[("min", "0")]`.
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,

    /// Ordered list of unmet requirements.
    ///
    /// Only the password validator fills this, one entry per failed policy
    /// rule, so a form can render them as bullets.
    pub requirements: Vec<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            requirements: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Attaches the ordered list of unmet requirements.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.requirements = requirements.into_iter().map(Into::into).collect();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the unmet requirements, in policy order.
    #[must_use]
    pub fn requirements(&self) -> &[Cow<'static, str>] {
        &self.requirements
    }

    /// Returns true if the error lists individual requirements.
    #[must_use]
    pub fn has_requirements(&self) -> bool {
        !self.requirements.is_empty()
    }

    /// Returns true if the error has the given code.
    #[must_use]
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error with a ready-made message.
    pub fn required(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("required", message)
    }

    /// Creates a "required" error for a named field: `"{field} is required"`.
    pub fn required_field(field_name: &str) -> Self {
        Self::new("required", format!("{field_name} is required"))
    }

    /// Creates a "min_length" error.
    pub fn min_length(field_name: &str, min: usize, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("{field_name} must be at least {min} characters"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(field_name: &str, max: usize, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("{field_name} must be at most {max} characters"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }
}

/// Writes a bound the way a person would type it: `5` rather than `5.0`.
pub(crate) struct Bound(pub f64);

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            write!(f, "{}", if self.0 > 0.0 { "∞" } else { "-∞" })
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
