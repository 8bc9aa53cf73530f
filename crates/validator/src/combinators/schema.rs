//! Form schema and form data access.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::Map;

use crate::foundation::{BoxedRule, FieldValue};

// ============================================================================
// FORM SCHEMA
// ============================================================================

/// Ordered mapping from field name to that field's rules.
///
/// Field order is insertion order and is preserved in the form report.
///
/// # Examples
///
/// ```
/// use hearth_validator::combinators::FormSchema;
/// use hearth_validator::rules;
/// use hearth_validator::rules::{email, required};
///
/// let schema = FormSchema::new()
///     .field("name", rules![required("Name")])
///     .field("email", rules![required("Email"), email()]);
///
/// assert_eq!(schema.field_names().collect::<Vec<_>>(), ["name", "email"]);
/// ```
#[derive(Default)]
pub struct FormSchema {
    fields: IndexMap<String, Vec<BoxedRule>>,
}

impl FormSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style.
    ///
    /// Adding a name that already exists replaces its rules in place.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rules: Vec<BoxedRule>) -> Self {
        self.insert(name, rules);
        self
    }

    /// Adds or replaces a field, returning the rules it previously had.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        rules: Vec<BoxedRule>,
    ) -> Option<Vec<BoxedRule>> {
        self.fields.insert(name.into(), rules)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Rules registered for a field.
    pub fn rules_for(&self, name: &str) -> Option<&[BoxedRule]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[BoxedRule])> {
        self.fields
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }
}

impl fmt::Debug for FormSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(name, rules)| (name, rules.len())))
            .finish()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<BoxedRule>)> for FormSchema {
    fn from_iter<T: IntoIterator<Item = (N, Vec<BoxedRule>)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        }
    }
}

// ============================================================================
// FORM DATA
// ============================================================================

/// Read access to submitted form values by field name.
///
/// A field the data does not contain is validated as an absent value.
pub trait FormData {
    /// Returns the raw value for `name`, if present.
    fn field(&self, name: &str) -> Option<&FieldValue>;
}

/// Only JSON objects carry fields; any other value has none.
impl FormData for FieldValue {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.as_object().and_then(|object| object.get(name))
    }
}

impl FormData for Map<String, FieldValue> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

impl<S: BuildHasher> FormData for HashMap<String, FieldValue, S> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

impl<S: BuildHasher> FormData for IndexMap<String, FieldValue, S> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

impl FormData for BTreeMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

impl<T: FormData + ?Sized> FormData for &T {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        (**self).field(name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
