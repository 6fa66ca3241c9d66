//! Property-based tests for formulation-validator.

use std::collections::HashMap;

use formulation_validator::prelude::*;
use proptest::prelude::*;

fn empty_model() -> HashMap<String, Value> {
    HashMap::new()
}

fn builtin_condition(rule: BuiltinRule, n: i64) -> RuleCondition {
    match rule {
        BuiltinRule::MinLength | BuiltinRule::MaxLength => RuleCondition::Number(n),
        _ => RuleCondition::Flag(true),
    }
}

// ============================================================================
// IDEMPOTENCY: evaluate(x) == evaluate(x)
// ============================================================================

proptest! {
    #[test]
    fn evaluate_rule_idempotent(s in ".{0,40}", n in 0i64..50, idx in 0usize..6) {
        let rule = BuiltinRule::ALL[idx];
        let condition = builtin_condition(rule, n);
        let value = Value::from(s);
        let model = empty_model();

        let r1 = evaluate_rule(rule.name(), &value, &condition, &model);
        let r2 = evaluate_rule(rule.name(), &value, &condition, &model);
        prop_assert_eq!(r1, r2);
    }
}

// ============================================================================
// EMPTY VALUES: only `required` rejects them
// ============================================================================

proptest! {
    #[test]
    fn non_required_rules_pass_on_empty(n in 0i64..1000, idx in 1usize..6) {
        let rule = BuiltinRule::ALL[idx];
        let condition = builtin_condition(rule, n);
        let model = empty_model();

        prop_assert!(evaluate_rule(rule.name(), &Value::Null, &condition, &model).is_ok());
        prop_assert!(evaluate_rule(rule.name(), &Value::from(""), &condition, &model).is_ok());
    }

    #[test]
    fn required_fails_iff_blank(s in "[ a-z\t]{0,10}") {
        let result = evaluate_rule("required", &Value::from(s.as_str()), &RuleCondition::Flag(true), &empty_model());
        prop_assert_eq!(result.is_err(), s.trim().is_empty());
    }
}

// ============================================================================
// LENGTH BOUNDARIES
// ============================================================================

proptest! {
    #[test]
    fn min_length_matches_char_count(s in "\\PC{1,30}", n in 0i64..40) {
        let count = i64::try_from(s.chars().count()).unwrap();
        let result = evaluate_rule("minLength", &Value::from(s), &RuleCondition::Number(n), &empty_model());
        prop_assert_eq!(result.is_ok(), count >= n);
    }

    #[test]
    fn max_length_matches_char_count(s in "\\PC{1,30}", n in 0i64..40) {
        let count = i64::try_from(s.chars().count()).unwrap();
        let result = evaluate_rule("maxLength", &Value::from(s), &RuleCondition::Number(n), &empty_model());
        prop_assert_eq!(result.is_ok(), count <= n);
    }

    #[test]
    fn failures_carry_declared_condition(s in "[a-z]{1,5}", n in 6i64..20) {
        let condition = RuleCondition::Number(n);
        let error = evaluate_rule("minLength", &Value::from(s), &condition, &empty_model()).unwrap_err();
        prop_assert_eq!(error, ValidationError::rule("minLength", condition));
    }
}

// ============================================================================
// PHONE NUMBERS
// ============================================================================

proptest! {
    #[test]
    fn phone_charset_always_passes(s in "[0-9 +()\\-]{1,20}") {
        prop_assert!(phone_numbers().check(&s));
    }

    #[test]
    fn letters_never_pass_phone(prefix in "[0-9]{0,5}", letter in "[a-zA-Z]") {
        let input = format!("{prefix}{letter}");
        prop_assert!(!phone_numbers().check(&input));
    }
}

// ============================================================================
// UNKNOWN RULES
// ============================================================================

proptest! {
    #[test]
    fn unknown_rules_pass(name in "x[A-Za-z]{1,10}", s in ".{0,10}") {
        let result = evaluate_rule(&name, &Value::from(s), &RuleCondition::Flag(true), &empty_model());
        prop_assert!(result.is_ok());
    }
}
