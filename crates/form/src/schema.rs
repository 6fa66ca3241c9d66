//! Field schemas: which rules apply to which field.
//!
//! A [`Schema`] is fixed once built. Primitive rules can come from a JSON
//! document; custom and cross-field rules are attached in code.
//!
//! ```rust
//! use formulation_form::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("firstname", FieldSchema::new().required().min_length(2).max_length(20))
//!     .field("phone", FieldSchema::new().phone_numbers())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(
//!     schema.field("firstname").unwrap().rule_names().collect::<Vec<_>>(),
//!     ["required", "minLength", "maxLength"]
//! );
//! ```

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use formulation_validator::foundation::{CustomRule, RuleCondition};
use formulation_validator::rules::BuiltinRule;

use crate::error::{FormError, Result};

// ============================================================================
// FIELD SCHEMA
// ============================================================================

/// Rule name to condition for one field, in declaration order.
///
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    rules: IndexMap<String, RuleCondition>,
}

impl FieldSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a rule; a later declaration under the same name replaces the
    /// earlier one but keeps its position.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, name: impl Into<String>, condition: impl Into<RuleCondition>) -> Self {
        self.rules.insert(name.into(), condition.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn required(self) -> Self {
        self.rule("required", RuleCondition::Flag(true))
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, min: usize) -> Self {
        self.rule("minLength", min)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, max: usize) -> Self {
        self.rule("maxLength", max)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn phone_numbers(self) -> Self {
        self.rule("phoneNumbers", RuleCondition::Flag(true))
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn email(self) -> Self {
        self.rule("email", RuleCondition::Flag(true))
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn no_only_spaces(self) -> Self {
        self.rule("noOnlySpaces", RuleCondition::Flag(true))
    }

    /// Declare a custom or cross-field rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn custom(self, name: impl Into<String>, rule: CustomRule) -> Self {
        self.rule(name, RuleCondition::Custom(rule))
    }

    #[must_use]
    pub fn get(&self, rule: &str) -> Option<&RuleCondition> {
        self.rules.get(rule)
    }

    /// Iterate over `(rule, condition)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleCondition)> {
        self.rules.iter().map(|(name, condition)| (name.as_str(), condition))
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Fields read by this field's cross-field rules.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.rules
            .values()
            .filter_map(|condition| condition.as_custom()?.dependency())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn check(&self, field: &str) -> Result<()> {
        for (rule, condition) in &self.rules {
            match BuiltinRule::from_name(rule) {
                Some(builtin) => builtin.check_condition(condition).map_err(|source| {
                    FormError::InvalidCondition {
                        field: field.to_owned(),
                        source,
                    }
                })?,
                None if condition.as_custom().is_none() => {
                    tracing::warn!(field, rule = rule.as_str(), "unknown rule will always pass");
                }
                None => {}
            }
        }
        Ok(())
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Field name to [`FieldSchema`], fixed for the lifetime of a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, FieldSchema>,
}

impl Schema {
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Read a schema of primitive rules from JSON.
    ///
    /// ```rust
    /// use formulation_form::schema::Schema;
    ///
    /// let schema = Schema::from_json(r#"{
    ///     "firstname": { "required": true, "minLength": 2 },
    ///     "email": { "email": true }
    /// }"#).unwrap();
    /// assert!(schema.contains("email"));
    ///
    /// assert!(Schema::from_json(r#"{ "firstname": { "minLength": true } }"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: IndexMap<String, FieldSchema> = serde_json::from_str(json)?;
        SchemaBuilder { fields, duplicate: None }.build()
    }

    /// Like [`Schema::from_json`] but from an already parsed document.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let fields: IndexMap<String, FieldSchema> = serde_json::from_value(value)?;
        SchemaBuilder { fields, duplicate: None }.build()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over `(field, schema)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields with a cross-field rule that reads `field`.
    pub fn dependents<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> {
        self.fields()
            .filter(move |(_, schema)| schema.dependencies().any(|dep| dep == field))
            .map(|(name, _)| name)
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

// ============================================================================
// BUILDER
// ============================================================================

/// Builds a [`Schema`], checking every built-in rule's condition.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: IndexMap<String, FieldSchema>,
    duplicate: Option<String>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Declaring the same name twice fails at
    /// [`build`](Self::build).
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        match self.fields.entry(name.into()) {
            Entry::Occupied(entry) => {
                self.duplicate.get_or_insert_with(|| entry.key().clone());
            }
            Entry::Vacant(entry) => {
                entry.insert(schema);
            }
        }
        self
    }

    /// Finish the schema.
    ///
    /// # Errors
    ///
    /// [`FormError::DuplicateField`] if a field was declared twice, and
    /// [`FormError::InvalidCondition`] if a built-in rule has a condition of
    /// the wrong shape (`minLength: true`, `required: 3`, ...).
    pub fn build(self) -> Result<Schema> {
        if let Some(field) = self.duplicate {
            return Err(FormError::DuplicateField { field });
        }
        for (name, field) in &self.fields {
            field.check(name)?;
        }
        tracing::debug!(fields = self.fields.len(), "schema built");
        Ok(Schema {
            fields: self.fields,
        })
    }
}
