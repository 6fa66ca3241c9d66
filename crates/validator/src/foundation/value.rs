//! Field values and cross-field lookup.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The raw value of a form field.
///
/// Text inputs hold [`Value::Text`], checkboxes hold [`Value::Bool`], and a
/// field that was never set holds [`Value::Null`]. Serializes as a bare JSON
/// string, boolean or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value yet.
    #[default]
    Null,
    /// Checkbox state.
    Bool(bool),
    /// Text content.
    Text(String),
}

impl Value {
    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the checkbox state, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text when it is non-empty.
    ///
    /// Whitespace counts as content here; only `required` trims.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.as_text().filter(|text| !text.is_empty())
    }

    /// Returns true for `null` and empty text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(_) => false,
            Self::Text(text) => text.is_empty(),
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(checked: bool) -> Self {
        Self::Bool(checked)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// FIELD LOOKUP
// ============================================================================

/// Read access to other fields' current values.
///
/// Cross-field rules resolve their `dependsOn` target through this trait, so
/// the engine never needs to know how the form stores its model.
pub trait FieldLookup {
    /// Returns the current value of `field`, or `None` when the field is absent.
    fn lookup(&self, field: &str) -> Option<&Value>;
}

impl FieldLookup for HashMap<String, Value> {
    fn lookup(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl FieldLookup for IndexMap<String, Value> {
    fn lookup(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl<L: FieldLookup + ?Sized> FieldLookup for &L {
    fn lookup(&self, field: &str) -> Option<&Value> {
        (**self).lookup(field)
    }
}
