//! # formulation-validator
//!
//! The rule engine behind Formulation forms: pure, stateless predicates
//! evaluated against a single field value.
//!
//! ## Quick Start
//!
//! ```rust
//! use formulation_validator::prelude::*;
//!
//! let model: std::collections::HashMap<String, Value> = Default::default();
//!
//! let condition = RuleCondition::Number(2);
//! assert!(evaluate_rule("minLength", &Value::from("ab"), &condition, &model).is_ok());
//! assert!(evaluate_rule("minLength", &Value::from("a"), &condition, &model).is_err());
//! ```
//!
//! ## Built-in Rules
//!
//! | name | rule |
//! |---|---|
//! | `required` | [`Required`](rules::Required) |
//! | `minLength` | [`MinLength`](rules::MinLength) |
//! | `maxLength` | [`MaxLength`](rules::MaxLength) |
//! | `phoneNumbers` | [`PhoneNumbers`](rules::PhoneNumbers) |
//! | `email` | [`Email`](rules::Email) |
//! | `noOnlySpaces` | [`NoOnlySpaces`](rules::NoOnlySpaces) |
//!
//! Every rule except `required` passes on an empty value, so format rules
//! only apply once the field has content.
//!
//! ## Custom Rules
//!
//! A [`CustomRule`](foundation::CustomRule) carries its own predicate and
//! message, optionally reading another field through
//! [`FieldLookup`](foundation::FieldLookup).

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod messages;
pub mod prelude;
pub mod rules;

pub use engine::evaluate_rule;
