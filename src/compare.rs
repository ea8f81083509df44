//! Normalized string comparison
//!
//! The textual half of the equal-string constraint. Both sides are turned into a
//! stream of comparable characters, optionally lower-cased and with white-space
//! removed, and then compared element by element.
//!
//! # Example
//!
//! ```rust
//! use equal_string::compare::strings_equal;
//!
//! assert!(strings_equal(Some("Hello"), "hello", true, false));
//! assert!(strings_equal(Some("a b"), "a  b", false, true));
//! assert!(!strings_equal(Some("a b"), "a  b", false, false));
//! assert!(!strings_equal(None, "anything", true, true));
//! ```

/// A normalized character together with the index of the source character it
/// came from. Lower-casing can expand one source character into several.
type Unit = (usize, char);

fn normalize(value: &str, case_insensitive: bool, ignore_whitespace: bool) -> Vec<Unit> {
    let mut units = Vec::with_capacity(value.len());
    for (index, c) in value.chars().enumerate() {
        if ignore_whitespace && c.is_whitespace() {
            continue;
        }
        if case_insensitive {
            units.extend(c.to_lowercase().map(|lower| (index, lower)));
        } else {
            units.push((index, c));
        }
    }
    units
}

/// Compare two strings under the given normalization policy.
///
/// An absent `expected` never equals a string. With `ignore_whitespace`, every
/// character for which [`char::is_whitespace`] holds is dropped from both sides,
/// so `"a b"`, `"a  b"` and `"ab"` all compare equal. With `case_insensitive`,
/// characters are compared after full Unicode lower-casing.
pub fn strings_equal(
    expected: Option<&str>,
    actual: &str,
    case_insensitive: bool,
    ignore_whitespace: bool,
) -> bool {
    let Some(expected) = expected else {
        return false;
    };

    if !case_insensitive && !ignore_whitespace {
        return expected == actual;
    }

    let expected = normalize(expected, case_insensitive, ignore_whitespace);
    let actual = normalize(actual, case_insensitive, ignore_whitespace);
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(&actual)
            .all(|((_, e), (_, a))| e == a)
}

/// Character index in `actual` where the two strings stop matching.
///
/// Returns `None` when the strings are equal under the given policy. When `actual`
/// is a strict prefix of `expected`, the index is one past its last character.
///
/// # Example
///
/// ```rust
/// use equal_string::compare::first_difference;
///
/// assert_eq!(first_difference("hello", "help", false, false), Some(3));
/// assert_eq!(first_difference("hello", "hell", false, false), Some(4));
/// assert_eq!(first_difference("HeLLo", "hello", true, false), None);
/// ```
pub fn first_difference(
    expected: &str,
    actual: &str,
    case_insensitive: bool,
    ignore_whitespace: bool,
) -> Option<usize> {
    let expected_units = normalize(expected, case_insensitive, ignore_whitespace);
    let actual_units = normalize(actual, case_insensitive, ignore_whitespace);

    for (position, &(index, a)) in actual_units.iter().enumerate() {
        match expected_units.get(position) {
            Some(&(_, e)) if e == a => continue,
            _ => return Some(index),
        }
    }

    if expected_units.len() > actual_units.len() {
        Some(actual.chars().count())
    } else {
        None
    }
}
