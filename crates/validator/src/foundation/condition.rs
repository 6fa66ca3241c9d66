//! Rule conditions.
//!
//! A schema declares each rule as `name -> condition`. Built-in rules take a
//! primitive condition (`required: true`, `minLength: 2`); custom and
//! cross-field rules take a [`CustomRule`] carrying the predicate itself.

use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::Value;

/// Predicate of a [`CustomRule`]: `(value, dependency_value) -> passed`.
///
/// `dependency_value` is `None` when the rule has no `depends_on` target or
/// the target is missing from the model.
pub type TestFn = Arc<dyn Fn(&Value, Option<&Value>) -> bool + Send + Sync>;

// ============================================================================
// CUSTOM RULE
// ============================================================================

/// A user-supplied rule with its own message.
///
/// # Examples
///
/// ```rust
/// use formulation_validator::foundation::{CustomRule, Value};
///
/// let not_admin = CustomRule::new("That name is reserved.", |value| {
///     value.as_text() != Some("admin")
/// });
/// assert!(not_admin.test(&Value::from("alice"), None));
///
/// let confirm = CustomRule::depends_on("password", "Passwords do not match.", |value, other| {
///     Some(value) == other
/// });
/// assert!(confirm.test(&Value::from("s3cret"), Some(&Value::from("s3cret"))));
/// assert!(!confirm.test(&Value::from("s3cret"), None));
/// ```
#[derive(Clone)]
pub struct CustomRule {
    test: TestFn,
    message: String,
    depends_on: Option<String>,
}

impl CustomRule {
    /// Creates a rule that only looks at the field's own value.
    pub fn new<F>(message: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(move |value: &Value, _: Option<&Value>| test(value)),
            message: message.into(),
            depends_on: None,
        }
    }

    /// Creates a cross-field rule that also receives `field`'s current value.
    ///
    /// The test must tolerate `None`: the dependency may be absent from the
    /// model.
    pub fn depends_on<F>(field: impl Into<String>, message: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value, Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
            message: message.into(),
            depends_on: Some(field.into()),
        }
    }

    /// Message reported when the test fails.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The field this rule reads, if any.
    #[must_use]
    pub fn dependency(&self) -> Option<&str> {
        self.depends_on.as_deref()
    }

    /// Runs the predicate.
    #[must_use]
    pub fn test(&self, value: &Value, dependency: Option<&Value>) -> bool {
        (self.test)(value, dependency)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("message", &self.message)
            .field("depends_on", &self.depends_on)
            .field("test", &"<function>")
            .finish()
    }
}

/// Two custom rules are equal when they share the same predicate instance.
impl PartialEq for CustomRule {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.test, &other.test)
            && self.message == other.message
            && self.depends_on == other.depends_on
    }
}

impl Serialize for CustomRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CustomRule", 2)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("dependsOn", &self.depends_on)?;
        state.end()
    }
}

// ============================================================================
// RULE CONDITION
// ============================================================================

/// The condition attached to a rule in a field schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleCondition {
    /// Switches a unit rule on or off (`required: true`).
    Flag(bool),
    /// Numeric parameter (`minLength: 2`).
    Number(i64),
    /// Text parameter, reserved for rules that take one.
    Text(String),
    /// Custom or cross-field predicate with its own message.
    Custom(CustomRule),
}

impl RuleCondition {
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_custom(&self) -> Option<&CustomRule> {
        match self {
            Self::Custom(custom) => Some(custom),
            _ => None,
        }
    }

    /// `false` only for `Flag(false)`, which switches a rule off.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Flag(false))
    }

    /// Short description of the condition's shape, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Flag(_) => "a boolean",
            Self::Number(_) => "a number",
            Self::Text(_) => "a string",
            Self::Custom(_) => "a custom test",
        }
    }
}

impl fmt::Display for RuleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
            Self::Custom(custom) => f.write_str(custom.message()),
        }
    }
}

/// Only primitive conditions can be read from a document; custom tests are
/// attached in code.
impl<'de> Deserialize<'de> for RuleCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Primitive {
            Flag(bool),
            Number(i64),
            Text(String),
        }

        Ok(match Primitive::deserialize(deserializer)? {
            Primitive::Flag(b) => Self::Flag(b),
            Primitive::Number(n) => Self::Number(n),
            Primitive::Text(text) => Self::Text(text),
        })
    }
}

impl From<bool> for RuleCondition {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<i32> for RuleCondition {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<i64> for RuleCondition {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<usize> for RuleCondition {
    fn from(n: usize) -> Self {
        Self::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<&str> for RuleCondition {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RuleCondition {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<CustomRule> for RuleCondition {
    fn from(custom: CustomRule) -> Self {
        Self::Custom(custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_primitives() {
        let conditions: Vec<RuleCondition> = serde_json::from_str(r#"[true, 2, "x"]"#).unwrap();
        assert_eq!(
            conditions,
            vec![
                RuleCondition::Flag(true),
                RuleCondition::Number(2),
                RuleCondition::Text("x".into()),
            ]
        );
    }

    #[test]
    fn test_custom_rule_equality_is_by_instance() {
        let a = CustomRule::new("nope", |_| false);
        let b = CustomRule::new("nope", |_| false);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_custom_rule_serializes_without_test() {
        let rule = CustomRule::depends_on("lastname", "Must match.", |_, _| true);
        let json = serde_json::to_value(RuleCondition::from(rule)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Must match.", "dependsOn": "lastname" })
        );
    }

    #[test]
    fn test_is_enabled() {
        assert!(RuleCondition::Flag(true).is_enabled());
        assert!(!RuleCondition::Flag(false).is_enabled());
        assert!(RuleCondition::Number(0).is_enabled());
    }

    #[test]
    fn test_display() {
        assert_eq!(RuleCondition::Number(20).to_string(), "20");
        assert_eq!(RuleCondition::from(true).to_string(), "true");
    }
}
