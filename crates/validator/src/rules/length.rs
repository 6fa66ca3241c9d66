//! Text length rules
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` has a
//! length of 5 regardless of its byte size.

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Validates that text has at least `min` characters.
    ///
    /// A one-character value fails `minLength: 2`; two characters pass.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } = "minLength" for str;
    check(self, input) { input.chars().count() >= self.min }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Validates that text does not exceed `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } = "maxLength" for str;
    check(self, input) { input.chars().count() <= self.max }
    fn max_length(max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_min_length_boundary() {
        let rule = MinLength::new(2);
        assert!(!rule.check("a"));
        assert!(rule.check("ab"));
        assert!(rule.check("abc"));
    }

    #[test]
    fn test_min_length_zero_accepts_everything() {
        assert!(min_length(0).check(""));
    }

    #[test]
    fn test_max_length_boundary() {
        let rule = MaxLength::new(5);
        assert!(rule.check("hello"));
        assert!(!rule.check("hello!"));
    }

    #[test]
    fn test_unicode_handling() {
        assert_eq!("h\u{e9}llo".len(), 6);
        assert!(max_length(5).check("h\u{e9}llo"));
        assert!(min_length(5).check("h\u{e9}llo"));
        assert!(!min_length(3).check("\u{1f44b}\u{1f30d}"));
    }

    #[test]
    fn test_names() {
        assert_eq!(min_length(1).name(), "minLength");
        assert_eq!(max_length(1).name(), "maxLength");
    }
}
