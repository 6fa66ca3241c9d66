//! Presence rule
//!
//! `required` is the only rule that looks at empty values; every other rule
//! is wrapped in [`WhenPresent`](crate::combinators::WhenPresent).

use crate::foundation::Value;

crate::rule! {
    /// Validates that a field has a value.
    ///
    /// Text must contain something other than whitespace, a checkbox must be
    /// checked, and `null` always fails.
    pub Required = "required" for Value;
    check(input) {
        match input {
            Value::Null => false,
            Value::Bool(checked) => *checked,
            Value::Text(text) => !text.trim().is_empty(),
        }
    }
    fn required();
}
