//! Core rule types and traits
//!
//! This module contains the building blocks shared by the rule engine and
//! the form layer:
//!
//! - **Traits**: [`Rule`], [`RuleExt`], [`FieldLookup`]
//! - **Values**: [`Value`]
//! - **Conditions**: [`RuleCondition`], [`CustomRule`]
//! - **Errors**: [`ValidationError`], [`ConditionError`]
//!
//! # Architecture
//!
//! ## 1. Rules are predicates
//!
//! A rule answers one question about one input and never fails with an
//! `Err`. The engine turns a `false` into a [`ValidationError`] carrying the
//! rule name and the condition the schema declared:
//!
//! ```rust
//! use formulation_validator::foundation::Rule;
//! use formulation_validator::rules::MinLength;
//!
//! assert!(MinLength::new(2).check("ab"));
//! assert!(!MinLength::new(2).check("a"));
//! ```
//!
//! ## 2. Errors are data
//!
//! A failed built-in rule is reported as `{rule, condition}` so the caller
//! can pick a message; a failed [`CustomRule`] already carries its message.
//!
//! ```rust
//! use formulation_validator::foundation::{RuleCondition, ValidationError};
//!
//! let error = ValidationError::rule("minLength", RuleCondition::Number(2));
//! assert_eq!(error.rule_name(), "minLength");
//! ```

pub mod condition;
pub mod error;
pub mod traits;
pub mod value;

pub use condition::{CustomRule, RuleCondition, TestFn};
pub use error::{ConditionError, ValidationError};
pub use traits::{Rule, RuleExt};
pub use value::{FieldLookup, Value};
