//! Display formatting for failure messages
//!
//! Nothing in this module influences whether a comparison succeeds. It only turns
//! values into the text shown in a failure message, optionally clipping long
//! strings so the interesting part stays visible.

use std::fmt;

/// Maximum number of characters shown for a clipped value.
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 78;

/// Marker written where text was clipped.
pub const ELLIPSIS: &str = "...";

/// Format an optional string the way it appears in a failure message.
///
/// # Example
///
/// ```rust
/// use equal_string::format::format_value;
///
/// assert_eq!(format_value(None), "null");
/// assert_eq!(format_value(Some("hi")), "\"hi\"");
/// assert_eq!(format_value(Some("a\"b\n")), "\"a\\\"b\\n\"");
/// ```
pub fn format_value(value: Option<&str>) -> String {
    match value {
        Some(s) => format!("{:?}", s),
        None => "null".to_string(),
    }
}

/// Format a value that is not a string.
///
/// # Example
///
/// ```rust
/// use equal_string::format::format_debug;
///
/// assert_eq!(format_debug(&42), "<42>");
/// assert_eq!(format_debug(&vec![1, 2]), "<[1, 2]>");
/// ```
pub fn format_debug(value: &dyn fmt::Debug) -> String {
    format!("<{:?}>", value)
}

/// Clip `value` to at most `max_len` characters, starting at char index `start`.
///
/// A leading [`ELLIPSIS`] marks text dropped before `start`, a trailing one marks
/// text dropped at the end. The markers count towards `max_len`.
///
/// # Example
///
/// ```rust
/// use equal_string::format::clip;
///
/// assert_eq!(clip("short", 10, 0), "short");
/// assert_eq!(clip("abcdefghij", 8, 0), "abcde...");
/// assert_eq!(clip("abcdefghij", 9, 4), "...efghij");
/// assert_eq!(clip("abcdefghijklmnop", 9, 4), "...efg...");
/// ```
pub fn clip(value: &str, max_len: usize, start: usize) -> String {
    let total = value.chars().count();
    let mut budget = max_len;
    let mut out = String::with_capacity(max_len.min(value.len()) + 2 * ELLIPSIS.len());

    if start > 0 {
        budget = budget.saturating_sub(ELLIPSIS.len());
        out.push_str(ELLIPSIS);
    }

    let remaining = total.saturating_sub(start);
    if remaining > budget {
        budget = budget.saturating_sub(ELLIPSIS.len());
        out.extend(value.chars().skip(start).take(budget));
        out.push_str(ELLIPSIS);
    } else {
        out.extend(value.chars().skip(start));
    }
    out
}

/// Pick a clip start that keeps `focus` (a char index) inside the visible window.
///
/// Returns 0 whenever the whole value fits. The start never goes past the point
/// where the tail, behind a leading [`ELLIPSIS`], fits without being clipped.
pub fn clip_start(len: usize, max_len: usize, focus: usize) -> usize {
    if len <= max_len {
        return 0;
    }
    focus
        .saturating_sub(max_len / 2)
        .min((len + ELLIPSIS.len()).saturating_sub(max_len))
}

/// Format an optional string for display, clipping it when `clip_on_display` is set.
pub fn display_value(
    value: Option<&str>,
    clip_on_display: bool,
    max_len: usize,
    focus: Option<usize>,
) -> String {
    match value {
        Some(s) if clip_on_display => {
            let start = clip_start(s.chars().count(), max_len, focus.unwrap_or(0));
            format_value(Some(clip(s, max_len, start).as_str()))
        }
        other => format_value(other),
    }
}
