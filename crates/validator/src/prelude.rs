//! Prelude module for convenient imports.
//!
//! Provides a single `use formulation_validator::prelude::*;` import that
//! brings in the rule trait, value and condition types, built-in rules and
//! the message table.

// ============================================================================
// FOUNDATION: Core traits, values, conditions, errors
// ============================================================================

pub use crate::foundation::{
    ConditionError, CustomRule, FieldLookup, Rule, RuleCondition, RuleExt, ValidationError, Value,
};

// ============================================================================
// RULES: Built-in rules and the name table
// ============================================================================

pub use crate::rules::{
    BuiltinRule, Email, MaxLength, MinLength, NoOnlySpaces, PhoneNumbers, Required, email,
    max_length, min_length, no_only_spaces, phone_numbers, required,
};

// ============================================================================
// COMBINATORS, ENGINE, MESSAGES
// ============================================================================

pub use crate::combinators::{WhenPresent, when_present};
pub use crate::engine::evaluate_rule;
pub use crate::messages::{MessageTemplate, Messages, default_message};
