//! Single-rule evaluation.
//!
//! [`evaluate_rule`] is the one entry point the form layer needs: it resolves
//! custom and cross-field conditions, dispatches everything else to the
//! built-in table and reports failures as [`ValidationError`] data.

use std::borrow::Cow;

use crate::foundation::{FieldLookup, RuleCondition, ValidationError, Value};
use crate::rules::BuiltinRule;

/// Evaluates one rule of a field schema against `value`.
///
/// Resolution order:
///
/// 1. A [`RuleCondition::Custom`] runs its own test. With a `depends_on`
///    target the test also receives that field's value from `model` (or
///    `None` when the model has no such field). A failing test yields a
///    [`ValidationError::Message`].
/// 2. Otherwise `rule` is looked up in the built-in table; a failure yields
///    a [`ValidationError::Rule`] carrying the declared condition.
/// 3. Unknown rule names pass.
///
/// Never panics; the function is pure and may run concurrently for
/// independent fields.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use formulation_validator::prelude::*;
///
/// let mut model = HashMap::new();
/// model.insert("lastname".to_string(), Value::from("Bar"));
///
/// let equal = RuleCondition::from(CustomRule::depends_on(
///     "lastname",
///     "Last names do not match.",
///     |value, other| Some(value) == other,
/// ));
///
/// assert!(evaluate_rule("isEqualTo", &Value::from("Bar"), &equal, &model).is_ok());
/// let error = evaluate_rule("isEqualTo", &Value::from("Baz"), &equal, &model).unwrap_err();
/// assert_eq!(error.text(), Some("Last names do not match."));
/// ```
pub fn evaluate_rule<L>(
    rule: &str,
    value: &Value,
    condition: &RuleCondition,
    model: &L,
) -> Result<(), ValidationError>
where
    L: FieldLookup + ?Sized,
{
    if let RuleCondition::Custom(custom) = condition {
        let dependency = custom.dependency();
        let passed = custom.test(value, dependency.and_then(|field| model.lookup(field)));
        tracing::trace!(rule, ?dependency, passed, "custom rule evaluated");
        return if passed {
            Ok(())
        } else {
            Err(ValidationError::message(
                rule.to_owned(),
                custom.message(),
                dependency,
            ))
        };
    }

    let Some(builtin) = BuiltinRule::from_name(rule) else {
        tracing::trace!(rule, "unknown rule passes");
        return Ok(());
    };

    let passed = builtin.check(value, condition);
    tracing::trace!(rule, passed, "built-in rule evaluated");
    if passed {
        Ok(())
    } else {
        Err(ValidationError::rule(
            Cow::Borrowed(builtin.name()),
            condition.clone(),
        ))
    }
}
