//! The form model: current field values and their touched flags.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use formulation_validator::foundation::{FieldLookup, Value};

use crate::schema::Schema;

/// One field's value and whether the user has interacted with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    pub value: Value,
    #[serde(default)]
    pub is_touched: bool,
}

impl FieldValue {
    /// An untouched value.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            is_touched: false,
        }
    }

    /// A value the user has interacted with.
    pub fn touched(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            is_touched: true,
        }
    }
}

/// Field name to [`FieldValue`], in insertion order.
///
/// Absent entries read as an empty, untouched field. Serializes as a JSON
/// object of `{ value, isTouched }` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model {
    fields: IndexMap<String, FieldValue>,
}

impl Model {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A model holding `null` for every field of `schema`.
    #[must_use]
    pub fn seeded(schema: &Schema) -> Self {
        Self {
            fields: schema
                .field_names()
                .map(|name| (name.to_owned(), FieldValue::default()))
                .collect(),
        }
    }

    /// Build an untouched model from `(field, value)` pairs.
    pub fn from_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            fields: values
                .into_iter()
                .map(|(name, value)| (name.into(), FieldValue::new(value)))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// The current value of `field`.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).map(|entry| &entry.value)
    }

    /// Whether the user has interacted with `field`.
    #[must_use]
    pub fn is_touched(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|entry| entry.is_touched)
    }

    /// Write a value and its touched flag, inserting the field if needed.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>, touched: bool) {
        self.fields.insert(
            field.into(),
            FieldValue {
                value: value.into(),
                is_touched: touched,
            },
        );
    }

    /// Mark `field` touched without changing its value.
    pub fn touch(&mut self, field: &str) {
        if let Some(entry) = self.fields.get_mut(field) {
            entry.is_touched = true;
        } else {
            self.fields.insert(field.to_owned(), FieldValue::touched(Value::Null));
        }
    }

    /// Clear every touched flag.
    pub fn untouch_all(&mut self) {
        for entry in self.fields.values_mut() {
            entry.is_touched = false;
        }
    }

    /// Set every value to empty text and clear every touched flag.
    pub fn clear_values(&mut self) {
        for entry in self.fields.values_mut() {
            *entry = FieldValue::new("");
        }
    }

    /// Fields whose value differs from `baseline`, in this model's order
    /// followed by fields only the baseline has.
    ///
    /// Touched flags are ignored and absent fields compare as `null`.
    #[must_use]
    pub fn dirty_fields(&self, baseline: &Self) -> Vec<String> {
        let null = Value::Null;
        let changed = self
            .fields
            .iter()
            .filter(|(name, entry)| baseline.value(name).unwrap_or(&null) != &entry.value)
            .map(|(name, _)| name.clone());
        let dropped = baseline
            .fields
            .iter()
            .filter(|(name, entry)| !self.fields.contains_key(*name) && !entry.value.is_null())
            .map(|(name, _)| name.clone());
        changed.chain(dropped).collect()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterate over `(field, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldLookup for Model {
    fn lookup(&self, field: &str) -> Option<&Value> {
        self.value(field)
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Model {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }
}
