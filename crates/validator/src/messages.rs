//! Error message resolution.
//!
//! The engine reports *what* failed; turning that into text belongs to the
//! caller. This module ships the default English table and a resolver that
//! layers caller overrides on top of it:
//!
//! 1. custom-rule failures display their own message (with `{dependsOn}`
//!    replaced by the other field's name),
//! 2. otherwise an override registered for the rule name,
//! 3. otherwise the default table,
//! 4. otherwise the bare rule name.
//!
//! Templates may contain `{condition}`, replaced by the rule's condition.
//!
//! # Examples
//!
//! ```rust
//! use formulation_validator::prelude::*;
//!
//! let messages = Messages::new()
//!     .with("required", "I am mandatory")
//!     .with_render("minLength", |c| format!("Give me at least {c} characters."));
//!
//! let required = ValidationError::rule("required", RuleCondition::Flag(true));
//! let too_short = ValidationError::rule("minLength", RuleCondition::Number(2));
//! let too_long = ValidationError::rule("maxLength", RuleCondition::Number(20));
//!
//! assert_eq!(messages.resolve(&required), "I am mandatory");
//! assert_eq!(messages.resolve(&too_short), "Give me at least 2 characters.");
//! assert_eq!(messages.resolve(&too_long), "This field has a maximum of 20 characters.");
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::foundation::{RuleCondition, ValidationError};

const CONDITION_PLACEHOLDER: &str = "{condition}";
const DEPENDENCY_PLACEHOLDER: &str = "{dependsOn}";

/// Returns the default English message for a built-in rule.
///
/// `noOnlySpaces` and unknown rules have no default.
#[must_use]
pub fn default_message(rule: &str, condition: &RuleCondition) -> Option<String> {
    let message = match rule {
        "required" => "This field is required.".to_owned(),
        "minLength" => format!("This field has a minimum of {condition} characters."),
        "maxLength" => format!("This field has a maximum of {condition} characters."),
        "phoneNumbers" => "This is not a valid phone number.".to_owned(),
        "email" => "This is not a valid email address.".to_owned(),
        _ => return None,
    };
    Some(message)
}

// ============================================================================
// MESSAGE TEMPLATE
// ============================================================================

/// An override for one rule's message.
#[derive(Clone)]
pub enum MessageTemplate {
    /// Fixed text; `{condition}` is substituted.
    Text(String),
    /// Computed from the rule's condition.
    Render(Arc<dyn Fn(&RuleCondition) -> String + Send + Sync>),
}

impl MessageTemplate {
    pub fn render<F>(f: F) -> Self
    where
        F: Fn(&RuleCondition) -> String + Send + Sync + 'static,
    {
        Self::Render(Arc::new(f))
    }

    /// Produces the message for `condition`.
    #[must_use]
    pub fn format(&self, condition: &RuleCondition) -> String {
        match self {
            Self::Text(text) => text.replace(CONDITION_PLACEHOLDER, &condition.to_string()),
            Self::Render(render) => render(condition),
        }
    }
}

impl fmt::Debug for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Render(_) => f.debug_tuple("Render").field(&"<function>").finish(),
        }
    }
}

impl From<&str> for MessageTemplate {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for MessageTemplate {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// ============================================================================
// MESSAGES
// ============================================================================

/// Per-rule message overrides on top of the default table.
///
/// Deserializes from a JSON object of rule name to template string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "IndexMap<String, String>")]
pub struct Messages {
    overrides: IndexMap<String, MessageTemplate>,
}

impl Messages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the override for `rule`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, rule: impl Into<String>, template: impl Into<MessageTemplate>) -> Self {
        self.insert(rule, template);
        self
    }

    /// Adds or replaces a computed override for `rule`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_render<F>(self, rule: impl Into<String>, render: F) -> Self
    where
        F: Fn(&RuleCondition) -> String + Send + Sync + 'static,
    {
        self.with(rule, MessageTemplate::render(render))
    }

    pub fn insert(&mut self, rule: impl Into<String>, template: impl Into<MessageTemplate>) {
        self.overrides.insert(rule.into(), template.into());
    }

    #[must_use]
    pub fn get(&self, rule: &str) -> Option<&MessageTemplate> {
        self.overrides.get(rule)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Resolves the display text for one error.
    #[must_use]
    pub fn resolve(&self, error: &ValidationError) -> String {
        match error {
            ValidationError::Message {
                text, depends_on, ..
            } => match depends_on {
                Some(other) => text.replace(DEPENDENCY_PLACEHOLDER, other),
                None => text.clone(),
            },
            ValidationError::Rule { rule, condition } => self
                .get(rule)
                .map(|template| template.format(condition))
                .or_else(|| default_message(rule, condition))
                .unwrap_or_else(|| rule.to_string()),
        }
    }

    /// Resolves every error in order.
    #[must_use]
    pub fn resolve_all(&self, errors: &[ValidationError]) -> Vec<String> {
        errors.iter().map(|error| self.resolve(error)).collect()
    }
}

impl From<IndexMap<String, String>> for Messages {
    fn from(map: IndexMap<String, String>) -> Self {
        Self {
            overrides: map
                .into_iter()
                .map(|(rule, text)| (rule, MessageTemplate::Text(text)))
                .collect(),
        }
    }
}
