//! Core traits for the rule system
//!
//! This module defines the trait every built-in rule implements.

use crate::combinators::WhenPresent;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A named, pure predicate over a single input.
///
/// Rules are generic over their input so that text rules can work on `str`
/// while presence rules inspect the whole [`Value`](crate::foundation::Value).
/// A rule never produces an error itself: it answers `true` (satisfied) or
/// `false` (violated) and the engine builds the
/// [`ValidationError`](crate::foundation::ValidationError).
///
/// # Examples
///
/// ```rust
/// use formulation_validator::foundation::Rule;
///
/// struct Lowercase;
///
/// impl Rule for Lowercase {
///     type Input = str;
///
///     fn name(&self) -> &'static str {
///         "lowercase"
///     }
///
///     fn check(&self, input: &str) -> bool {
///         input.chars().all(|c| !c.is_alphabetic() || c.is_lowercase())
///     }
/// }
///
/// assert!(Lowercase.check("abc"));
/// assert!(!Lowercase.check("Abc"));
/// ```
pub trait Rule {
    /// The type of input being checked.
    ///
    /// Use `?Sized` to allow unsized inputs like `str`.
    type Input: ?Sized;

    /// The schema name of the rule, e.g. `"minLength"`.
    fn name(&self) -> &'static str;

    /// Returns `true` when the input satisfies the rule.
    fn check(&self, input: &Self::Input) -> bool;
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Rule`].
pub trait RuleExt: Rule + Sized {
    /// Only applies the rule once the value has text content.
    ///
    /// Empty text, `null` and booleans pass without running the inner rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formulation_validator::prelude::*;
    ///
    /// let rule = min_length(3).when_present();
    /// assert!(rule.check(&Value::Null));
    /// assert!(rule.check(&Value::from("")));
    /// assert!(!rule.check(&Value::from("ab")));
    /// ```
    fn when_present(self) -> WhenPresent<Self>
    where
        Self: Rule<Input = str>,
    {
        WhenPresent::new(self)
    }
}

impl<T: Rule> RuleExt for T {}
