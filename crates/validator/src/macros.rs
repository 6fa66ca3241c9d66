//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: create a complete rule (struct + `Rule` impl + factory fn)
//!
//! # Examples
//!
//! ```rust
//! use formulation_validator::rule;
//! use formulation_validator::foundation::Rule;
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub Digits = "digits" for str;
//!     check(input) { input.chars().all(|c| c.is_ascii_digit()) }
//!     fn digits();
//! }
//!
//! // Struct with fields
//! rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub ExactLength { length: usize } = "exactLength" for str;
//!     check(self, input) { input.chars().count() == self.length }
//!     fn exact_length(length: usize);
//! }
//!
//! assert!(digits().check("0123"));
//! assert!(exact_length(3).check("abc"));
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Rule` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]` on struct rules; unit rules derive everything.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub Email = "email" for str;
///     check(input) { EMAIL_PATTERN.is_match(input) }
///     fn email();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } = "minLength" for str;
///     check(self, input) { input.chars().count() >= self.min }
///     fn min_length(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $rule_name:literal for $input:ty;
        check($inp:ident) $check:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name = $rule_name for $input;
            check($inp) $check
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule, no factory ────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $rule_name:literal for $input:ty;
        check($inp:ident) $check:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            fn name(&self) -> &'static str {
                $rule_name
            }

            fn check(&self, $inp: &Self::Input) -> bool $check
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } = $rule_name:literal for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } = $rule_name for $input;
            check($self_, $inp) $check
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } = $rule_name:literal for $input:ty;
        check($self_:ident, $inp:ident) $check:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            fn name(&self) -> &'static str {
                $rule_name
            }

            fn check(&$self_, $inp: &Self::Input) -> bool $check
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::Rule;

    crate::rule! {
        /// Test rule: only ASCII digits.
        Digits = "digits" for str;
        check(input) { input.chars().all(|c| c.is_ascii_digit()) }
        fn digits();
    }

    crate::rule! {
        #[derive(Copy, PartialEq, Eq)]
        StartsWith { prefix: char } = "startsWith" for str;
        check(self, input) { input.starts_with(self.prefix) }
        fn starts_with(prefix: char);
    }

    #[test]
    fn test_unit_rule() {
        assert_eq!(digits().name(), "digits");
        assert!(Digits.check("0123"));
        assert!(!Digits.check("01a"));
    }

    #[test]
    fn test_struct_rule() {
        let rule = starts_with('+');
        assert_eq!(rule.name(), "startsWith");
        assert_eq!(rule, StartsWith::new('+'));
        assert!(rule.check("+31"));
        assert!(!rule.check("31"));
    }
}
