//! The outcome of one equal-string evaluation

use std::fmt;

/// Outcome of evaluating an [`EqualStringConstraint`](super::EqualStringConstraint).
///
/// Besides the verdict it carries everything a reporter needs: the rendered
/// expected and actual values and the modifiers in effect. Values are rendered
/// (and clipped, if enabled) when the result is built, so a result never refers
/// back to the constraint or the actual value.
///
/// # Example
///
/// ```rust
/// use equal_string::equal_string;
///
/// let result = equal_string("Hello").ignore_case().evaluate("world").unwrap();
///
/// assert!(!result.succeeded());
/// assert_eq!(
///     result.to_string(),
///     "  Expected: \"Hello\", ignoring case\n  But was:  \"world\"\n  Strings differ at index 0."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub(crate) succeeded: bool,
    pub(crate) description: String,
    pub(crate) actual_value: String,
    pub(crate) difference_index: Option<usize>,
    pub(crate) case_insensitive: bool,
    pub(crate) ignore_whitespace: bool,
    pub(crate) clip_on_display: bool,
}

impl ComparisonResult {
    /// Whether the actual value satisfied the constraint.
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Alias of [`succeeded`](Self::succeeded).
    pub fn is_success(&self) -> bool {
        self.succeeded
    }

    /// Inverse of [`succeeded`](Self::succeeded).
    pub fn is_failure(&self) -> bool {
        !self.succeeded
    }

    /// Rendered description of the expected side, including modifier suffixes.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Rendered actual value: a quoted string, `null`, or `<Debug>` output.
    pub fn actual_value(&self) -> &str {
        &self.actual_value
    }

    /// Character index in the actual text where it first departs from the
    /// expected one. Only set for failed textual comparisons.
    pub fn difference_index(&self) -> Option<usize> {
        self.difference_index
    }

    /// Case was ignored.
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// White-space was ignored.
    pub fn ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    /// Long values were clipped when rendered.
    pub fn clip_on_display(&self) -> bool {
        self.clip_on_display
    }

    /// The report text, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.succeeded {
            return write!(f, "  Passed: {}", self.description);
        }

        write!(
            f,
            "  Expected: {}\n  But was:  {}",
            self.description, self.actual_value
        )?;
        if let Some(index) = self.difference_index {
            write!(f, "\n  Strings differ at index {}.", index)?;
        }
        Ok(())
    }
}
