//! WHEN PRESENT combinator - format rules only apply to content
//!
//! Every built-in rule except `required` passes vacuously on an empty value.
//! [`WhenPresent`] lifts a text rule to a [`Value`] rule with exactly that
//! behaviour: `null`, empty text and booleans pass, non-empty text is handed
//! to the inner rule.
//!
//! # Examples
//!
//! ```rust
//! use formulation_validator::combinators::WhenPresent;
//! use formulation_validator::foundation::{Rule, Value};
//! use formulation_validator::rules::PhoneNumbers;
//!
//! let rule = WhenPresent::new(PhoneNumbers);
//! assert!(rule.check(&Value::Null)); // skipped
//! assert!(rule.check(&Value::from(""))); // skipped
//! assert!(!rule.check(&Value::from("abc"))); // checked, fails
//! assert!(rule.check(&Value::from("0123456789"))); // checked, passes
//! ```

use crate::foundation::{Rule, Value};

/// Applies a text rule only when the value has text content.
///
/// # Type Parameters
///
/// * `R` - The inner rule, checking `str`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WhenPresent<R> {
    pub(crate) inner: R,
}

impl<R> WhenPresent<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwraps the inner rule, dropping the empty-value skip.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Rule for WhenPresent<R>
where
    R: Rule<Input = str>,
{
    type Input = Value;

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn check(&self, input: &Value) -> bool {
        input.content().is_none_or(|text| self.inner.check(text))
    }
}

/// Creates a `WhenPresent` combinator.
pub fn when_present<R>(rule: R) -> WhenPresent<R>
where
    R: Rule<Input = str>,
{
    WhenPresent::new(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverSatisfied;

    impl Rule for NeverSatisfied {
        type Input = str;

        fn name(&self) -> &'static str {
            "never"
        }

        fn check(&self, _input: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_empty_values_skip_inner_rule() {
        let rule = when_present(NeverSatisfied);
        assert!(rule.check(&Value::Null));
        assert!(rule.check(&Value::from("")));
        assert!(rule.check(&Value::Bool(false)));
        assert!(rule.check(&Value::Bool(true)));
    }

    #[test]
    fn test_content_reaches_inner_rule() {
        let rule = when_present(NeverSatisfied);
        assert!(!rule.check(&Value::from("x")));
        assert!(!rule.check(&Value::from("   ")));
    }

    #[test]
    fn test_into_inner_checks_without_skip() {
        let rule = when_present(crate::rules::MinLength::new(2));
        assert!(rule.check(&Value::from("")));

        let inner = rule.into_inner();
        assert!(!inner.check(""));
        assert!(inner.check("ab"));
    }
}
