//! Rule combinators
//!
//! Combinators wrap a rule and change when or how it applies.
//!
//! # Available Combinators
//!
//! - [`WhenPresent`] - run a text rule only when the field has content

pub mod when_present;

pub use when_present::{WhenPresent, when_present};
