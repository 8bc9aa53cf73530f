//! Raw input abstraction.
//!
//! Form fields arrive as strings, numbers, or nothing at all. [`AsInput`]
//! gives every validator one view over all of them, so the same function
//! accepts `&str`, `String`, `Option<String>`, numbers, and
//! [`FieldValue`] (a JSON value) without conversions at the call site.

use std::borrow::Cow;

/// The raw value of a single form field.
pub type FieldValue = serde_json::Value;

/// Converts a raw input into the text/number views validators work on.
///
/// # Examples
///
/// ```
/// use hearth_validator::foundation::AsInput;
/// use serde_json::json;
///
/// assert_eq!(json!(12.5).text().as_deref(), Some("12.5"));
/// assert_eq!(json!(null).text(), None);
/// assert!(json!("").is_empty_input());
/// assert!(!"x".is_empty_input());
/// ```
pub trait AsInput {
    /// Text form of the value, or `None` when the value is absent.
    fn text(&self) -> Option<Cow<'_, str>>;

    /// Numeric form, for values that are natively numbers.
    fn number(&self) -> Option<f64> {
        None
    }

    /// Absent or the empty string.
    fn is_empty_input(&self) -> bool {
        self.text().is_none_or(|text| text.is_empty())
    }
}

impl AsInput for str {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl AsInput for String {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl AsInput for Cow<'_, str> {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl AsInput for FieldValue {
    fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Null => None,
            FieldValue::String(s) => Some(Cow::Borrowed(s.as_str())),
            FieldValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            FieldValue::Number(n) => Some(Cow::Owned(n.to_string())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    fn number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl<T: AsInput> AsInput for Option<T> {
    fn text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(AsInput::text)
    }

    fn number(&self) -> Option<f64> {
        self.as_ref().and_then(AsInput::number)
    }
}

impl<T: AsInput + ?Sized> AsInput for &T {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }

    fn number(&self) -> Option<f64> {
        (**self).number()
    }
}

macro_rules! impl_numeric_input {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsInput for $ty {
                fn text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }

                #[allow(clippy::cast_lossless, clippy::unnecessary_cast, trivial_numeric_casts)]
                fn number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )+
    };
}

impl_numeric_input!(f64, i64, i32, u64, u32);

// Read back from the text form: `12.34_f32 as f64` is 12.340000152...
impl AsInput for f32 {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }

    fn number(&self) -> Option<f64> {
        self.to_string().parse().ok()
    }
}
