//! Usage errors raised by the equal-string constraint.
//!
//! An assertion that simply does not hold is *not* an error: it is reported as a
//! failed [`ComparisonResult`](crate::ComparisonResult). [`ConstraintError`] is
//! reserved for programmer mistakes, where the caller asked for something the
//! comparison cannot honor.

use std::fmt;

/// Error returned when a constraint is evaluated in a way it cannot support.
///
/// # Examples
///
/// ```rust
/// use equal_string::{equal_string, ActualValue, ConstraintError, StringEquatable};
///
/// #[derive(Debug)]
/// struct Token(&'static str);
///
/// impl StringEquatable for Token {
///     fn equals_str(&self, other: Option<&str>) -> bool {
///         other == Some(self.0)
///     }
/// }
///
/// let err = equal_string("abc")
///     .ignore_case()
///     .evaluate(ActualValue::equatable(&Token("ABC")))
///     .unwrap_err();
///
/// assert!(matches!(err, ConstraintError::InvalidOperation { case_insensitive: true, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// A case or white-space modifier was combined with an actual value that can
    /// only test equality against a string, never expose its text.
    InvalidOperation {
        /// `ignore_case` was requested.
        case_insensitive: bool,
        /// `ignore_whitespace` was requested.
        ignore_whitespace: bool,
    },
}

impl ConstraintError {
    pub(crate) fn invalid_operation(case_insensitive: bool, ignore_whitespace: bool) -> Self {
        ConstraintError::InvalidOperation {
            case_insensitive,
            ignore_whitespace,
        }
    }

    /// Names of the modifiers that made the evaluation invalid.
    pub fn modifiers(&self) -> Vec<&'static str> {
        match self {
            ConstraintError::InvalidOperation {
                case_insensitive,
                ignore_whitespace,
            } => {
                let mut names = Vec::new();
                if *case_insensitive {
                    names.push("ignore_case");
                }
                if *ignore_whitespace {
                    names.push("ignore_whitespace");
                }
                names
            }
        }
    }
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::InvalidOperation { .. } => write!(
                f,
                "invalid operation: {} cannot be applied to a value that only supports \
                 direct string equality",
                self.modifiers().join(" and ")
            ),
        }
    }
}

impl std::error::Error for ConstraintError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConstraintError>;
