//! Validation state snapshots.
//!
//! States are plain values: every transition builds a new
//! [`FormValidationState`] rather than mutating shared state, so two states
//! can be compared with `==`.

use indexmap::IndexMap;
use serde::Serialize;

use formulation_validator::foundation::ValidationError;

use crate::schema::Schema;

/// Validation result of one field.
///
/// `is_valid` is `None` while the field is pristine (not yet evaluated).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidationState {
    pub is_valid: Option<bool>,
    pub is_touched: bool,
    pub errors: Vec<ValidationError>,
}

impl FieldValidationState {
    /// A field that has not been evaluated.
    #[must_use]
    pub fn pristine() -> Self {
        Self::default()
    }

    /// A field evaluated to `errors`.
    #[must_use]
    pub fn evaluated(errors: Vec<ValidationError>, touched: bool) -> Self {
        Self {
            is_valid: Some(errors.is_empty()),
            is_touched: touched,
            errors,
        }
    }

    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.is_valid.is_none()
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.is_valid == Some(false)
    }
}

/// Validation result of the whole form.
///
/// `is_valid` is `Some(false)` when any field is invalid and `None` only
/// before the first evaluation or after a reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidationState {
    pub is_valid: Option<bool>,
    pub fields: IndexMap<String, FieldValidationState>,
}

impl FormValidationState {
    /// No fields and no verdict.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every field of `schema` pristine.
    #[must_use]
    pub fn pristine(schema: &Schema) -> Self {
        Self {
            is_valid: None,
            fields: schema
                .field_names()
                .map(|name| (name.to_owned(), FieldValidationState::pristine()))
                .collect(),
        }
    }

    /// The same fields, all pristine.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            is_valid: None,
            fields: self
                .fields
                .keys()
                .map(|name| (name.clone(), FieldValidationState::pristine()))
                .collect(),
        }
    }

    /// Every known field pristine: the fields already registered plus any
    /// field of `schema` not seen yet.
    #[must_use]
    pub fn reset_for(&self, schema: &Schema) -> Self {
        let mut state = self.reset();
        for name in schema.field_names() {
            state.fields.entry(name.to_owned()).or_default();
        }
        state
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValidationState> {
        self.fields.get(name)
    }

    /// Replace one field's state, leaving the form verdict untouched.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, state: FieldValidationState) -> Self {
        self.fields.insert(name.into(), state);
        self
    }

    /// Whether any field is currently invalid.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.fields.values().any(FieldValidationState::is_invalid)
    }

    /// Names of the invalid fields.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, state)| state.is_invalid())
            .map(|(name, _)| name.as_str())
    }

    /// Verdict derived from the field states alone: `false` if any field is
    /// invalid, `true` if every field is valid, otherwise `None`.
    #[must_use]
    pub fn summarize(&self) -> Option<bool> {
        if self.has_failures() {
            Some(false)
        } else if !self.fields.is_empty()
            && self.fields.values().all(|state| state.is_valid == Some(true))
        {
            Some(true)
        } else {
            None
        }
    }
}
