//! Testing utilities for the equal-string constraint
//!
//! Assertion macros that turn an evaluation into a test outcome, and, with the
//! `proptest` feature, an `Arbitrary` implementation for
//! [`EqualStringConstraint`](crate::EqualStringConstraint).
//!
//! # Examples
//!
//! ```rust
//! use equal_string::{assert_fails, assert_passes, equal_string};
//!
//! assert_passes!(equal_string("abc"), "abc");
//! assert_fails!(equal_string("abc"), "xyz");
//! ```

/// Assert that a constraint is satisfied by an actual value.
///
/// Panics with the constraint's failure message if the evaluation fails, and with
/// the usage error if evaluation is invalid.
///
/// # Example
///
/// ```rust
/// use equal_string::{assert_passes, equal_string};
///
/// assert_passes!(equal_string("Hello").ignore_case(), "HELLO");
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($constraint:expr, $actual:expr) => {
        match $constraint.evaluate($actual) {
            Ok(result) if result.succeeded() => {}
            Ok(result) => {
                panic!("Expected constraint to pass, but it failed:\n{}", result);
            }
            Err(e) => {
                panic!("Expected constraint to pass, got error: {}", e);
            }
        }
    };
}

/// Assert that a constraint is not satisfied by an actual value.
///
/// # Example
///
/// ```rust
/// use equal_string::{assert_fails, equal_string};
///
/// assert_fails!(equal_string("Hello"), "HELLO");
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($constraint:expr, $actual:expr) => {
        match $constraint.evaluate($actual) {
            Ok(result) if !result.succeeded() => {}
            Ok(result) => {
                panic!("Expected constraint to fail, but it passed:\n{}", result);
            }
            Err(e) => {
                panic!("Expected constraint to fail, got error: {}", e);
            }
        }
    };
}

/// Assert that evaluating a constraint is rejected as an invalid operation.
///
/// # Example
///
/// ```rust
/// use equal_string::{assert_invalid_operation, equal_string, ActualValue, StringEquatable};
///
/// #[derive(Debug)]
/// struct Id(u8);
///
/// impl StringEquatable for Id {
///     fn equals_str(&self, other: Option<&str>) -> bool {
///         other == Some(self.0.to_string().as_str())
///     }
/// }
///
/// assert_invalid_operation!(
///     equal_string("7").ignore_whitespace(),
///     ActualValue::equatable(&Id(7))
/// );
/// ```
#[macro_export]
macro_rules! assert_invalid_operation {
    ($constraint:expr, $actual:expr) => {
        match $constraint.evaluate($actual) {
            Err($crate::ConstraintError::InvalidOperation { .. }) => {}
            Ok(result) => {
                panic!("Expected an invalid operation, got a result:\n{}", result);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::EqualStringConstraint {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            proptest::option::of(any::<String>()),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(expected, case_insensitive, ignore_whitespace, clip)| {
                let mut constraint = crate::EqualStringConstraint::new(expected);
                constraint
                    .set_ignore_case(case_insensitive)
                    .set_ignore_whitespace(ignore_whitespace)
                    .set_clip(clip);
                constraint
            })
            .boxed()
    }
}
