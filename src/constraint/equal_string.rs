//! The equal-string constraint
//!
//! [`EqualStringConstraint`] holds an expected string and the modifiers that
//! control how an actual value is compared against it. Evaluation classifies the
//! actual value and applies the first rule that fits:
//!
//! 1. absent actual: passes only if the expected value is absent too
//! 2. absent expected: fails for any present actual
//! 3. native string: normalized textual comparison
//! 4. convertible: converted, then compared as in 3
//! 5. string-equatable: direct equality, illegal with case or white-space modifiers
//! 6. opaque: fails
//!
//! # Example
//!
//! ```rust
//! use equal_string::equal_string;
//!
//! let constraint = equal_string("Hello World").ignore_case().ignore_whitespace();
//!
//! assert!(constraint.evaluate("hello   world").unwrap().succeeded());
//! assert!(!constraint.evaluate("goodbye world").unwrap().succeeded());
//! assert_eq!(
//!     constraint.description(),
//!     "\"Hello World\", ignoring case, ignoring white-space"
//! );
//! ```

use std::borrow::Cow;

use super::actual::{ActualValue, StringEquatable};
use super::result::ComparisonResult;
use crate::compare::{first_difference, strings_equal};
use crate::error::{ConstraintError, Result};
use crate::format::{display_value, format_debug, format_value, DEFAULT_MAX_DISPLAY_LEN};

/// Constraint that an actual value equals an expected string.
///
/// Modifiers consume and return the constraint so they can be chained; the
/// `set_*` methods do the same through `&mut self`. Evaluation borrows the
/// constraint immutably, so the modifiers cannot change while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualStringConstraint {
    pub(crate) expected: Option<String>,
    pub(crate) case_insensitive: bool,
    pub(crate) ignore_whitespace: bool,
    pub(crate) clip_on_display: bool,
}

impl EqualStringConstraint {
    /// Create a constraint. `None` expects an absent value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use equal_string::EqualStringConstraint;
    ///
    /// let expect_null = EqualStringConstraint::new(None::<String>);
    /// assert!(expect_null.evaluate(None::<&str>).unwrap().succeeded());
    /// assert!(!expect_null.evaluate("").unwrap().succeeded());
    /// ```
    pub fn new<S: Into<String>>(expected: Option<S>) -> Self {
        EqualStringConstraint {
            expected: expected.map(Into::into),
            case_insensitive: false,
            ignore_whitespace: false,
            clip_on_display: true,
        }
    }

    /// A constraint that expects an absent value.
    pub fn null() -> Self {
        Self::new(None::<String>)
    }

    /// Compare without regard to case.
    pub fn ignore_case(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Compare without regard to white-space.
    pub fn ignore_whitespace(mut self) -> Self {
        self.ignore_whitespace = true;
        self
    }

    /// Show long values in full in failure messages.
    pub fn no_clip(mut self) -> Self {
        self.clip_on_display = false;
        self
    }

    /// Set the case modifier in place.
    pub fn set_ignore_case(&mut self, on: bool) -> &mut Self {
        self.case_insensitive = on;
        self
    }

    /// Set the white-space modifier in place.
    pub fn set_ignore_whitespace(&mut self, on: bool) -> &mut Self {
        self.ignore_whitespace = on;
        self
    }

    /// Set clipping in place.
    pub fn set_clip(&mut self, on: bool) -> &mut Self {
        self.clip_on_display = on;
        self
    }

    /// The expected string, if any.
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Whether case is ignored.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Whether white-space is ignored.
    pub fn is_ignoring_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    /// Whether long values are clipped in failure messages.
    pub fn clips_on_display(&self) -> bool {
        self.clip_on_display
    }

    /// Human-readable description of the expected side.
    ///
    /// The formatted expected value followed by `, ignoring case` and then
    /// `, ignoring white-space` for whichever modifiers are on. Never clipped.
    pub fn description(&self) -> String {
        self.describe(format_value(self.expected()))
    }

    fn describe(&self, mut text: String) -> String {
        if self.case_insensitive {
            text.push_str(", ignoring case");
        }
        if self.ignore_whitespace {
            text.push_str(", ignoring white-space");
        }
        text
    }

    /// Evaluate the constraint against an actual value.
    ///
    /// Returns `Ok` with a failed result when the values differ. Returns
    /// [`ConstraintError::InvalidOperation`] only when a string-equatable value is
    /// evaluated with `ignore_case` or `ignore_whitespace` on.
    pub fn evaluate<'a>(&self, actual: impl Into<ActualValue<'a>>) -> Result<ComparisonResult> {
        let actual = actual.into();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            shape = actual.shape(),
            expected = ?self.expected,
            case_insensitive = self.case_insensitive,
            ignore_whitespace = self.ignore_whitespace,
            "evaluating equal-string constraint"
        );

        let (succeeded, text) = self.dispatch(&actual)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(shape = actual.shape(), succeeded, "equal-string constraint evaluated");

        Ok(self.build_result(&actual, succeeded, text))
    }

    /// Evaluate and return only the verdict.
    pub fn matches<'a>(&self, actual: impl Into<ActualValue<'a>>) -> Result<bool> {
        self.evaluate(actual).map(|result| result.succeeded())
    }

    /// Apply the dispatch rules. Also returns the text that was compared, so the
    /// result can report it without converting twice.
    fn dispatch<'v>(&self, actual: &'v ActualValue<'_>) -> Result<(bool, Option<Cow<'v, str>>)> {
        let expected = self.expected();

        match actual {
            ActualValue::Absent => Ok((expected.is_none(), None)),
            _ if expected.is_none() => Ok((false, None)),
            ActualValue::NativeString(text) => {
                Ok((self.compare_text(text), Some(Cow::Borrowed(&**text))))
            }
            ActualValue::ImplicitlyStringConvertible(value) => match value.convert_to_string() {
                Some(text) => Ok((self.compare_text(&text), Some(Cow::Owned(text)))),
                None => match value.as_string_equatable() {
                    Some(equatable) => self.compare_equatable(equatable).map(|ok| (ok, None)),
                    None => Ok((false, None)),
                },
            },
            ActualValue::StringEquatable(value) => {
                self.compare_equatable(*value).map(|ok| (ok, None))
            }
            ActualValue::Opaque(_) => Ok((false, None)),
        }
    }

    fn compare_text(&self, actual: &str) -> bool {
        strings_equal(
            self.expected(),
            actual,
            self.case_insensitive,
            self.ignore_whitespace,
        )
    }

    fn compare_equatable(&self, actual: &dyn StringEquatable) -> Result<bool> {
        if self.case_insensitive || self.ignore_whitespace {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                case_insensitive = self.case_insensitive,
                ignore_whitespace = self.ignore_whitespace,
                "normalization requested for a string-equatable value"
            );
            return Err(ConstraintError::invalid_operation(
                self.case_insensitive,
                self.ignore_whitespace,
            ));
        }
        Ok(actual.equals_str(self.expected()))
    }

    fn build_result(
        &self,
        actual: &ActualValue<'_>,
        succeeded: bool,
        text: Option<Cow<'_, str>>,
    ) -> ComparisonResult {
        let difference_index = match (succeeded, self.expected(), text.as_deref()) {
            (false, Some(expected), Some(text)) => first_difference(
                expected,
                text,
                self.case_insensitive,
                self.ignore_whitespace,
            ),
            _ => None,
        };

        let actual_value = match (text.as_deref(), actual) {
            (Some(text), _) => display_value(
                Some(text),
                self.clip_on_display,
                DEFAULT_MAX_DISPLAY_LEN,
                difference_index,
            ),
            (None, ActualValue::Absent) => format_value(None),
            (None, ActualValue::NativeString(s)) => display_value(
                Some(&**s),
                self.clip_on_display,
                DEFAULT_MAX_DISPLAY_LEN,
                None,
            ),
            (None, ActualValue::ImplicitlyStringConvertible(v)) => format_debug(v),
            (None, ActualValue::StringEquatable(v)) => format_debug(v),
            (None, ActualValue::Opaque(v)) => format_debug(v),
        };

        let expected = display_value(
            self.expected(),
            self.clip_on_display,
            DEFAULT_MAX_DISPLAY_LEN,
            difference_index,
        );

        ComparisonResult {
            succeeded,
            description: self.describe(expected),
            actual_value,
            difference_index,
            case_insensitive: self.case_insensitive,
            ignore_whitespace: self.ignore_whitespace,
            clip_on_display: self.clip_on_display,
        }
    }
}

impl From<&str> for EqualStringConstraint {
    fn from(expected: &str) -> Self {
        Self::new(Some(expected))
    }
}

impl From<String> for EqualStringConstraint {
    fn from(expected: String) -> Self {
        Self::new(Some(expected))
    }
}

impl From<Option<String>> for EqualStringConstraint {
    fn from(expected: Option<String>) -> Self {
        Self::new(expected)
    }
}

/// Create a constraint expecting `expected`.
///
/// # Example
///
/// ```rust
/// use equal_string::equal_string;
///
/// assert!(equal_string("abc").matches("abc").unwrap());
/// assert!(!equal_string("abc").matches("ABC").unwrap());
/// ```
pub fn equal_string(expected: impl Into<String>) -> EqualStringConstraint {
    EqualStringConstraint::new(Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::actual::{ConvertibleToString, Displayed};

    #[derive(Debug)]
    struct Name(&'static str);

    impl ConvertibleToString for Name {
        fn convert_to_string(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[derive(Debug)]
    struct Exact(&'static str);

    impl StringEquatable for Exact {
        fn equals_str(&self, other: Option<&str>) -> bool {
            other == Some(self.0)
        }
    }

    /// Converts to nothing but still supports direct equality.
    #[derive(Debug)]
    struct Hidden(&'static str);

    impl ConvertibleToString for Hidden {
        fn convert_to_string(&self) -> Option<String> {
            None
        }

        fn as_string_equatable(&self) -> Option<&dyn StringEquatable> {
            Some(self)
        }
    }

    impl StringEquatable for Hidden {
        fn equals_str(&self, other: Option<&str>) -> bool {
            other == Some(self.0)
        }
    }

    #[derive(Debug)]
    struct Empty;

    impl ConvertibleToString for Empty {
        fn convert_to_string(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_defaults() {
        let c = equal_string("x");
        assert_eq!(c.expected(), Some("x"));
        assert!(!c.is_case_insensitive());
        assert!(!c.is_ignoring_whitespace());
        assert!(c.clips_on_display());
    }

    #[test]
    fn test_modifiers_chain() {
        let c = equal_string("x").ignore_case().ignore_whitespace().no_clip();
        assert!(c.is_case_insensitive());
        assert!(c.is_ignoring_whitespace());
        assert!(!c.clips_on_display());
    }

    #[test]
    fn test_setters_in_place() {
        let mut c = equal_string("x");
        c.set_ignore_case(true).set_ignore_whitespace(true).set_clip(false);
        assert_eq!(c, equal_string("x").ignore_case().ignore_whitespace().no_clip());
        c.set_ignore_case(false);
        assert!(!c.is_case_insensitive());
    }

    #[test]
    fn test_both_absent_succeeds() {
        let result = EqualStringConstraint::null().evaluate(ActualValue::Absent).unwrap();
        assert!(result.succeeded());
        assert_eq!(result.actual_value(), "null");
    }

    #[test]
    fn test_absent_actual_fails_against_present_expected() {
        let result = equal_string("x").evaluate(None::<&str>).unwrap();
        assert!(!result.succeeded());
        assert_eq!(result.difference_index(), None);
    }

    #[test]
    fn test_absent_expected_fails_for_any_present_actual() {
        let c = EqualStringConstraint::null();
        assert!(!c.matches("").unwrap());
        assert!(!c.matches(ActualValue::convertible(&Name("x"))).unwrap());
        assert!(!c.matches(ActualValue::opaque(&1)).unwrap());
    }

    #[test]
    fn test_absent_expected_skips_equatable_check() {
        // Rule 2 fires before the equatable rule can reject the modifiers.
        let c = EqualStringConstraint::null().ignore_case();
        assert!(!c.matches(ActualValue::equatable(&Exact("x"))).unwrap());
    }

    #[test]
    fn test_native_string() {
        assert!(equal_string("abc").matches("abc").unwrap());
        assert!(!equal_string("abc").matches("abd").unwrap());
        assert!(equal_string("Hello").ignore_case().matches("hello").unwrap());
        assert!(equal_string("a b").ignore_whitespace().matches("a  b").unwrap());
    }

    #[test]
    fn test_convertible_is_compared_textually() {
        let c = equal_string("TARGET").ignore_case();
        let result = c.evaluate(ActualValue::convertible(&Name("target"))).unwrap();
        assert!(result.succeeded());
        assert_eq!(result.actual_value(), "\"target\"");
    }

    #[test]
    fn test_convertible_failure_reports_difference() {
        let result = equal_string("target")
            .evaluate(ActualValue::convertible(&Displayed(42)))
            .unwrap();
        assert!(!result.succeeded());
        assert_eq!(result.actual_value(), "\"42\"");
        assert_eq!(result.difference_index(), Some(0));
    }

    #[test]
    fn test_convertible_without_value_falls_back_to_equatable() {
        assert!(equal_string("x").matches(ActualValue::convertible(&Hidden("x"))).unwrap());
        assert!(!equal_string("y").matches(ActualValue::convertible(&Hidden("x"))).unwrap());

        let err = equal_string("x")
            .ignore_whitespace()
            .evaluate(ActualValue::convertible(&Hidden("x")))
            .unwrap_err();
        assert_eq!(err, ConstraintError::invalid_operation(false, true));
    }

    #[test]
    fn test_convertible_without_value_or_equatable_is_opaque() {
        let result = equal_string("Empty")
            .evaluate(ActualValue::convertible(&Empty))
            .unwrap();
        assert!(!result.succeeded());
        assert_eq!(result.actual_value(), "<Empty>");
    }

    #[test]
    fn test_equatable_delegates() {
        assert!(equal_string("x").matches(ActualValue::equatable(&Exact("x"))).unwrap());
        assert!(!equal_string("X").matches(ActualValue::equatable(&Exact("x"))).unwrap());
    }

    #[test]
    fn test_equatable_rejects_normalization() {
        let exact = Exact("x");
        let err = equal_string("x")
            .ignore_case()
            .evaluate(ActualValue::equatable(&exact))
            .unwrap_err();
        assert_eq!(err, ConstraintError::invalid_operation(true, false));

        let err = equal_string("x")
            .ignore_case()
            .ignore_whitespace()
            .matches(ActualValue::equatable(&exact))
            .unwrap_err();
        assert_eq!(err, ConstraintError::invalid_operation(true, true));
    }

    #[test]
    fn test_equatable_allows_no_clip() {
        assert!(equal_string("x")
            .no_clip()
            .matches(ActualValue::equatable(&Exact("x")))
            .unwrap());
    }

    #[test]
    fn test_opaque_always_fails() {
        for c in [
            equal_string("1"),
            equal_string("1").ignore_case(),
            equal_string("1").ignore_whitespace(),
            equal_string("1").ignore_case().ignore_whitespace().no_clip(),
        ] {
            let result = c.evaluate(ActualValue::opaque(&1)).unwrap();
            assert!(!result.succeeded());
            assert_eq!(result.actual_value(), "<1>");
        }
    }

    #[test]
    fn test_description_suffix_order() {
        assert_eq!(equal_string("x").description(), "\"x\"");
        assert_eq!(
            equal_string("x").ignore_whitespace().ignore_case().description(),
            "\"x\", ignoring case, ignoring white-space"
        );
        assert_eq!(EqualStringConstraint::null().description(), "null");
    }

    #[test]
    fn test_clip_changes_only_display() {
        let expected = "a".repeat(200);
        let actual = format!("{}b", "a".repeat(199));

        let clipped = equal_string(expected.as_str()).evaluate(actual.as_str()).unwrap();
        let full = equal_string(expected.as_str())
            .no_clip()
            .evaluate(actual.as_str())
            .unwrap();

        assert_eq!(clipped.succeeded(), full.succeeded());
        assert_eq!(clipped.difference_index(), Some(199));
        assert_eq!(full.difference_index(), Some(199));
        assert!(clipped.actual_value().starts_with("\"..."));
        assert!(clipped.actual_value().ends_with("ab\""));
        assert_eq!(full.actual_value(), format!("{:?}", actual));
        assert_eq!(full.description(), format!("{:?}", expected));
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(EqualStringConstraint::from("x"), equal_string("x"));
        assert_eq!(EqualStringConstraint::from(String::from("x")), equal_string("x"));
        assert_eq!(EqualStringConstraint::from(None::<String>), EqualStringConstraint::null());
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_evaluation_is_traced() {
            equal_string("x").evaluate("x").unwrap();
            assert!(logs_contain("equal-string constraint evaluated"));
            assert!(logs_contain("shape=\"string\""));
        }

        #[traced_test]
        #[test]
        fn test_invalid_operation_warns() {
            let _ = equal_string("x")
                .ignore_case()
                .evaluate(ActualValue::equatable(&Exact("x")));
            assert!(logs_contain("normalization requested for a string-equatable value"));
        }
    }
}
