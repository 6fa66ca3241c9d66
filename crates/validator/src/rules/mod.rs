//! Built-in rules
//!
//! | name | rule | condition |
//! |---|---|---|
//! | `required` | [`Required`] | `true` / `false` |
//! | `minLength` | [`MinLength`] | non-negative number |
//! | `maxLength` | [`MaxLength`] | non-negative number |
//! | `phoneNumbers` | [`PhoneNumbers`] | `true` / `false` |
//! | `email` | [`Email`] | `true` / `false` |
//! | `noOnlySpaces` | [`NoOnlySpaces`] | `true` / `false` |
//!
//! A `false` flag switches the rule off.

pub mod content;
pub mod length;
pub mod presence;

pub use content::{Email, NoOnlySpaces, PhoneNumbers, email, no_only_spaces, phone_numbers};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use presence::{Required, required};

use std::fmt;

use crate::foundation::{ConditionError, Rule, RuleCondition, RuleExt, Value};

// ============================================================================
// NAME TABLE
// ============================================================================

/// The built-in rule table, keyed by schema name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRule {
    Required,
    MinLength,
    MaxLength,
    PhoneNumbers,
    Email,
    NoOnlySpaces,
}

impl BuiltinRule {
    /// Every built-in rule, in table order.
    pub const ALL: [Self; 6] = [
        Self::Required,
        Self::MinLength,
        Self::MaxLength,
        Self::PhoneNumbers,
        Self::Email,
        Self::NoOnlySpaces,
    ];

    /// Looks up a rule by its schema name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.name() == name)
    }

    /// The schema name, e.g. `"minLength"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Required => Required.name(),
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::PhoneNumbers => PhoneNumbers.name(),
            Self::Email => Email.name(),
            Self::NoOnlySpaces => NoOnlySpaces.name(),
        }
    }

    fn takes_length(self) -> bool {
        matches!(self, Self::MinLength | Self::MaxLength)
    }

    /// Checks that `condition` has the shape this rule needs.
    ///
    /// Custom conditions are accepted under any name: they replace the
    /// built-in predicate.
    pub fn check_condition(self, condition: &RuleCondition) -> Result<(), ConditionError> {
        let accepted = match condition {
            RuleCondition::Custom(_) => true,
            RuleCondition::Number(n) => self.takes_length() && *n >= 0,
            RuleCondition::Flag(_) => !self.takes_length(),
            RuleCondition::Text(_) => false,
        };
        if accepted {
            return Ok(());
        }

        let expected = if self.takes_length() {
            "a non-negative number"
        } else {
            "a boolean"
        };
        let found = match condition {
            RuleCondition::Number(n) => format!("{n}"),
            other => other.kind().to_owned(),
        };
        Err(ConditionError::new(self.name(), expected, found))
    }

    /// Runs the rule against `value` with a primitive `condition`.
    ///
    /// A disabled flag or a condition of the wrong shape passes.
    #[must_use]
    pub fn check(self, value: &Value, condition: &RuleCondition) -> bool {
        if !condition.is_enabled() {
            return true;
        }
        let length = || {
            condition
                .as_number()
                .and_then(|n| usize::try_from(n).ok())
        };

        match self {
            Self::Required => Required.check(value),
            Self::MinLength => length().is_none_or(|min| min_length(min).when_present().check(value)),
            Self::MaxLength => length().is_none_or(|max| max_length(max).when_present().check(value)),
            Self::PhoneNumbers => PhoneNumbers.when_present().check(value),
            Self::Email => Email.when_present().check(value),
            Self::NoOnlySpaces => NoOnlySpaces.when_present().check(value),
        }
    }
}

impl fmt::Display for BuiltinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
