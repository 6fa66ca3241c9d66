//! Widget bindings.
//!
//! A UI layer asks the session how to render an input ([`FieldBinding`]) and
//! hands user events back as [`InputEvent`]s.

use serde::{Deserialize, Serialize};

use formulation_validator::foundation::Value;

use crate::options::ValidateOn;

/// The kind of widget a field is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Checkbox,
}

/// A change coming from a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InputEvent {
    Text { field: String, value: String },
    Checkbox { field: String, checked: bool },
}

impl InputEvent {
    pub fn text(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn checkbox(field: impl Into<String>, checked: bool) -> Self {
        Self::Checkbox {
            field: field.into(),
            checked,
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Text { field, .. } | Self::Checkbox { field, .. } => field,
        }
    }

    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Text { .. } => InputKind::Text,
            Self::Checkbox { .. } => InputKind::Checkbox,
        }
    }

    /// Split into the field name and the value to store.
    #[must_use]
    pub fn into_parts(self) -> (String, Value) {
        match self {
            Self::Text { field, value } => (field, Value::Text(value)),
            Self::Checkbox { field, checked } => (field, Value::Bool(checked)),
        }
    }
}

/// What a widget should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BoundValue {
    Text(String),
    Checked(bool),
}

/// Rendering instructions for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBinding {
    pub name: String,
    pub kind: InputKind,
    pub value: BoundValue,
    /// Whether the widget must report blur events.
    pub handles_blur: bool,
}

impl FieldBinding {
    /// Bind `field` to its current model value, if any.
    ///
    /// Missing text reads as `""` and a missing checkbox as unchecked.
    pub fn new(
        field: impl Into<String>,
        kind: InputKind,
        current: Option<&Value>,
        policy: ValidateOn,
    ) -> Self {
        let value = match kind {
            InputKind::Text => BoundValue::Text(
                current
                    .filter(|value| !value.is_null())
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            ),
            InputKind::Checkbox => {
                BoundValue::Checked(current.and_then(Value::as_bool).unwrap_or(false))
            }
        };
        Self {
            name: field.into(),
            kind,
            value,
            handles_blur: policy == ValidateOn::Blur,
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            BoundValue::Text(text) => Some(text),
            BoundValue::Checked(_) => None,
        }
    }

    #[must_use]
    pub fn checked(&self) -> Option<bool> {
        match self.value {
            BoundValue::Checked(checked) => Some(checked),
            BoundValue::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn event_parts() {
        let (field, value) = InputEvent::text("firstname", "Foo").into_parts();
        assert_eq!(field, "firstname");
        assert_eq!(value, Value::from("Foo"));

        let event = InputEvent::checkbox("agree", true);
        assert_eq!(event.kind(), InputKind::Checkbox);
        assert_eq!(event.into_parts().1, Value::Bool(true));
    }

    #[test]
    fn event_deserializes_tagged() {
        let event: InputEvent =
            serde_json::from_str(r#"{ "kind": "checkbox", "field": "agree", "checked": false }"#)
                .unwrap();
        assert_eq!(event, InputEvent::checkbox("agree", false));
    }

    #[rstest]
    #[case(InputKind::Text, None, BoundValue::Text(String::new()))]
    #[case(InputKind::Text, Some(Value::Null), BoundValue::Text(String::new()))]
    #[case(InputKind::Text, Some(Value::from("Foo")), BoundValue::Text("Foo".into()))]
    #[case(InputKind::Checkbox, None, BoundValue::Checked(false))]
    #[case(InputKind::Checkbox, Some(Value::Bool(true)), BoundValue::Checked(true))]
    fn binding_defaults(
        #[case] kind: InputKind,
        #[case] current: Option<Value>,
        #[case] expected: BoundValue,
    ) {
        let binding = FieldBinding::new("f", kind, current.as_ref(), ValidateOn::Change);
        assert_eq!(binding.value, expected);
        assert!(!binding.handles_blur);
    }

    #[test]
    fn blur_policy_requests_blur_events() {
        let binding = FieldBinding::new("f", InputKind::Text, None, ValidateOn::Blur);
        assert!(binding.handles_blur);
        assert_eq!(binding.text(), Some(""));
        assert_eq!(binding.checked(), None);
    }
}
