//! Form combinator: validates every field of a form and aggregates.
//!
//! Unlike [`validate_field`], a form never short-circuits across fields.
//! Each field in the schema is validated with its own rules and the first
//! error of every failing field is collected into a [`FormReport`].

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::field::validate_field;
use super::schema::{FormData, FormSchema};
use crate::foundation::{FieldValue, ValidationError};

static ABSENT: FieldValue = FieldValue::Null;

// ============================================================================
// FORM REPORT
// ============================================================================

/// Result of validating a whole form.
///
/// Errors are keyed by field name in schema order. The form is valid
/// exactly when there are no errors.
///
/// Serializes as `{"isValid": bool, "errors": {field: message}}`, the
/// shape a form UI renders directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} form field(s) failed validation", .errors.len())]
pub struct FormReport {
    errors: IndexMap<String, ValidationError>,
}

impl FormReport {
    /// True when no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All field errors, in schema order.
    pub fn errors(&self) -> &IndexMap<String, ValidationError> {
        &self.errors
    }

    /// Error for one field, if it failed.
    pub fn error(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Field name and message pairs, in schema order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.message.as_ref()))
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` for a valid form, otherwise the report itself as the error.
    ///
    /// ```
    /// use hearth_validator::combinators::{FormSchema, validate_form};
    /// use hearth_validator::rules;
    /// use hearth_validator::rules::required;
    /// use serde_json::json;
    ///
    /// let schema = FormSchema::new().field("name", rules![required("Name")]);
    /// let report = validate_form(&json!({}), &schema);
    ///
    /// let error = report.into_result().unwrap_err();
    /// assert_eq!(error.to_string(), "1 form field(s) failed validation");
    /// ```
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }

    /// Consumes the report, yielding the field errors.
    pub fn into_errors(self) -> IndexMap<String, ValidationError> {
        self.errors
    }
}

impl Serialize for FormReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let messages: IndexMap<&str, &str> = self.messages().collect();

        let mut state = serializer.serialize_struct("FormReport", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &messages)?;
        state.end()
    }
}

// ============================================================================
// VALIDATE FORM
// ============================================================================

/// Validates every field in `schema` against `data`.
///
/// Fields missing from `data` are validated as absent values. Every field
/// is checked regardless of earlier failures, and each failing field
/// contributes the first error its rules produced, tagged with the field
/// name in [`ValidationError::field`].
///
/// # Examples
///
/// ```
/// use hearth_validator::combinators::{FormSchema, validate_form};
/// use hearth_validator::rules;
/// use hearth_validator::rules::{email, required};
/// use serde_json::json;
///
/// let schema = FormSchema::new()
///     .field("name", rules![required("Name")])
///     .field("email", rules![required("Email"), email()]);
///
/// let report = validate_form(&json!({ "name": "", "email": "bad" }), &schema);
///
/// assert!(!report.is_valid());
/// assert_eq!(
///     serde_json::to_value(&report).unwrap(),
///     json!({
///         "isValid": false,
///         "errors": {
///             "name": "Name is required",
///             "email": "Please enter a valid email address"
///         }
///     })
/// );
/// ```
pub fn validate_form<D: FormData + ?Sized>(data: &D, schema: &FormSchema) -> FormReport {
    let mut errors = IndexMap::new();

    for (name, rules) in schema.iter() {
        let value = data.field(name).unwrap_or(&ABSENT);
        if let Err(error) = validate_field(value, rules) {
            tracing::debug!(field = %name, code = %error.code, "form field failed validation");
            errors.insert(name.to_owned(), error.with_field(name.to_owned()));
        }
    }

    tracing::debug!(
        fields = schema.len(),
        failed = errors.len(),
        "form validated"
    );

    FormReport { errors }
}

// ============================================================================
// TESTS
// ============================================================================
