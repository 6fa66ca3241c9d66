//! Text content rules
//!
//! Rules for checking the shape of text: phone numbers, email addresses and
//! whitespace-only input.

use std::sync::LazyLock;

/// Local part (dotted atoms or a quoted string) `@` a bracketed IPv4 address
/// or a dotted domain ending in a 2+ letter label.
static EMAIL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')')
}

// ============================================================================
// PHONE NUMBERS
// ============================================================================

crate::rule! {
    /// Validates that text only contains digits, whitespace, `+`, `-` and
    /// parentheses.
    ///
    /// This is a character-set check, not a dialling-plan check.
    pub PhoneNumbers = "phoneNumbers" for str;
    check(input) { input.chars().all(is_phone_char) }
    fn phone_numbers();
}

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Validates email format with a permissive pattern.
    pub Email = "email" for str;
    check(input) { EMAIL_PATTERN.is_match(input) }
    fn email();
}

// ============================================================================
// NO ONLY SPACES
// ============================================================================

crate::rule! {
    /// Validates that text is not made of whitespace alone.
    pub NoOnlySpaces = "noOnlySpaces" for str;
    check(input) { !input.trim().is_empty() }
    fn no_only_spaces();
}
