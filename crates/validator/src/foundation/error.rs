//! Error types for rule failures and malformed conditions.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::foundation::RuleCondition;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One unsatisfied rule on one field.
///
/// Built-in rules report the rule name and the condition the schema declared,
/// leaving message selection to the caller. Custom rules report the message
/// they were declared with; when the rule read another field, that field's
/// name travels along so a message can mention both.
///
/// # Examples
///
/// ```rust
/// use formulation_validator::foundation::{RuleCondition, ValidationError};
///
/// let error = ValidationError::rule("maxLength", RuleCondition::Number(20));
/// assert_eq!(error.condition(), Some(&RuleCondition::Number(20)));
///
/// let error = ValidationError::message("isEqualTo", "Must match.", Some("lastname"));
/// assert_eq!(error.text(), Some("Must match."));
/// assert_eq!(error.dependency(), Some("lastname"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    /// A built-in rule failed.
    #[serde(rename_all = "camelCase")]
    Rule {
        /// Rule name, e.g. `"minLength"`.
        rule: Cow<'static, str>,
        /// The condition declared in the schema.
        condition: RuleCondition,
    },

    /// A custom rule failed and supplied its own message.
    #[serde(rename_all = "camelCase")]
    Message {
        /// Rule name as declared in the schema.
        rule: Cow<'static, str>,
        /// Message to display.
        text: String,
        /// Field the rule compared against, for cross-field rules.
        #[serde(skip_serializing_if = "Option::is_none")]
        depends_on: Option<String>,
    },
}

impl ValidationError {
    /// Creates a built-in rule failure.
    pub fn rule(rule: impl Into<Cow<'static, str>>, condition: RuleCondition) -> Self {
        Self::Rule {
            rule: rule.into(),
            condition,
        }
    }

    /// Creates a custom rule failure carrying its own message.
    pub fn message(
        rule: impl Into<Cow<'static, str>>,
        text: impl Into<String>,
        depends_on: Option<&str>,
    ) -> Self {
        Self::Message {
            rule: rule.into(),
            text: text.into(),
            depends_on: depends_on.map(str::to_owned),
        }
    }

    /// Name of the rule that failed.
    #[must_use]
    pub fn rule_name(&self) -> &str {
        match self {
            Self::Rule { rule, .. } | Self::Message { rule, .. } => rule,
        }
    }

    /// Condition of a built-in rule failure.
    #[must_use]
    pub fn condition(&self) -> Option<&RuleCondition> {
        match self {
            Self::Rule { condition, .. } => Some(condition),
            Self::Message { .. } => None,
        }
    }

    /// Message of a custom rule failure.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Message { text, .. } => Some(text),
            Self::Rule { .. } => None,
        }
    }

    /// The other field involved in a cross-field failure.
    #[must_use]
    pub fn dependency(&self) -> Option<&str> {
        match self {
            Self::Message { depends_on, .. } => depends_on.as_deref(),
            Self::Rule { .. } => None,
        }
    }

    #[must_use]
    pub fn is_cross_field(&self) -> bool {
        self.dependency().is_some()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule { rule, condition } => write!(f, "{rule} ({condition})"),
            Self::Message { text, .. } => f.write_str(text),
        }
    }
}

// ============================================================================
// CONDITION ERROR
// ============================================================================

/// A built-in rule was declared with a condition it cannot use.
///
/// Raised while a schema is being built, never during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rule `{rule}` expects {expected}, got {found}")]
pub struct ConditionError {
    /// Rule name as declared.
    pub rule: String,
    /// Description of the accepted condition.
    pub expected: &'static str,
    /// Description of the condition that was given.
    pub found: String,
}

impl ConditionError {
    pub fn new(rule: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            expected,
            found: found.into(),
        }
    }
}
