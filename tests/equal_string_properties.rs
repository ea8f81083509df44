//! Property-based tests for the equal-string constraint

use equal_string::prelude::*;
use proptest::prelude::*;

#[derive(Debug)]
struct Opaque(String);

#[derive(Debug)]
struct Wrapped(String);

impl ConvertibleToString for Wrapped {
    fn convert_to_string(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

fn modifiers() -> impl Strategy<Value = (bool, bool, bool)> {
    (any::<bool>(), any::<bool>(), any::<bool>())
}

fn configure(expected: &str, (case, whitespace, clip): (bool, bool, bool)) -> EqualStringConstraint {
    let mut constraint = equal_string(expected);
    constraint
        .set_ignore_case(case)
        .set_ignore_whitespace(whitespace)
        .set_clip(clip);
    constraint
}

proptest! {
    #[test]
    fn prop_string_equals_itself(s in any::<String>()) {
        prop_assert!(equal_string(s.as_str()).matches(s.as_str()).unwrap());
    }

    #[test]
    fn prop_string_equals_itself_under_any_modifiers(s in any::<String>(), m in modifiers()) {
        prop_assert!(configure(&s, m).matches(s.as_str()).unwrap());
    }

    #[test]
    fn prop_case_insensitive_accepts_lowercase(s in "[a-zA-Z ]{0,40}") {
        let lower = s.to_lowercase();
        prop_assert!(equal_string(s.as_str()).ignore_case().matches(lower.as_str()).unwrap());
    }

    #[test]
    fn prop_ignore_whitespace_accepts_stripped(s in "[a-z \t\n]{0,40}") {
        let stripped: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert!(equal_string(s.as_str())
            .ignore_whitespace()
            .matches(stripped.as_str())
            .unwrap());
    }

    #[test]
    fn prop_opaque_never_matches(s in any::<String>(), m in modifiers()) {
        let actual = Opaque(s.clone());
        let result = configure(&s, m).evaluate(ActualValue::opaque(&actual)).unwrap();
        prop_assert!(result.is_failure());
    }

    #[test]
    fn prop_null_expected_rejects_any_string(s in any::<String>()) {
        prop_assert!(!EqualStringConstraint::null().matches(s.as_str()).unwrap());
    }

    #[test]
    fn prop_convertible_agrees_with_native(
        expected in "[a-cA-C ]{0,8}",
        actual in "[a-cA-C ]{0,8}",
        m in modifiers(),
    ) {
        let constraint = configure(&expected, m);
        let wrapped = Wrapped(actual.clone());
        prop_assert_eq!(
            constraint.matches(actual.as_str()).unwrap(),
            constraint.matches(ActualValue::convertible(&wrapped)).unwrap()
        );
    }

    #[test]
    fn prop_clip_never_changes_outcome(
        expected in "[ab]{0,120}",
        actual in "[ab]{0,120}",
    ) {
        let clipped = equal_string(expected.as_str()).evaluate(actual.as_str()).unwrap();
        let full = equal_string(expected.as_str()).no_clip().evaluate(actual.as_str()).unwrap();
        prop_assert_eq!(clipped.succeeded(), full.succeeded());
        prop_assert_eq!(clipped.difference_index(), full.difference_index());
    }
}
