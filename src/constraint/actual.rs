//! Actual values and the string capabilities they may expose
//!
//! The constraint never inspects types at runtime. Instead the caller states what
//! a value can do by wrapping it in the matching [`ActualValue`] variant:
//!
//! - plain strings convert automatically through `From`
//! - types implementing [`ConvertibleToString`] go through [`ActualValue::convertible`]
//! - types implementing [`StringEquatable`] go through [`ActualValue::equatable`]
//! - anything else can still be passed with [`ActualValue::opaque`]
//!
//! # Example
//!
//! ```rust
//! use equal_string::{ActualValue, ConvertibleToString};
//!
//! #[derive(Debug)]
//! struct Slug(String);
//!
//! impl ConvertibleToString for Slug {
//!     fn convert_to_string(&self) -> Option<String> {
//!         Some(self.0.clone())
//!     }
//! }
//!
//! let slug = Slug("hello-world".to_string());
//! assert_eq!(ActualValue::convertible(&slug).shape(), "convertible");
//! assert_eq!(ActualValue::from("text").shape(), "string");
//! assert_eq!(ActualValue::from(None::<&str>).shape(), "absent");
//! ```

use std::borrow::Cow;
use std::fmt;

/// A type that defines how to present itself as a string.
///
/// The conversion must be pure. Returning `None` means the value has no textual
/// form; evaluation then falls through to [`as_string_equatable`] if the type
/// provides it, and otherwise treats the value as opaque.
///
/// [`as_string_equatable`]: ConvertibleToString::as_string_equatable
pub trait ConvertibleToString: fmt::Debug {
    /// Convert the value to its string form.
    fn convert_to_string(&self) -> Option<String>;

    /// Expose a direct string-equality capability for the same value.
    ///
    /// Only consulted when [`convert_to_string`](Self::convert_to_string) yields
    /// nothing.
    fn as_string_equatable(&self) -> Option<&dyn StringEquatable> {
        None
    }
}

/// A type that can test itself for equality against a string without exposing
/// its text.
///
/// Because the comparison is a black box, it cannot be combined with case or
/// white-space normalization.
pub trait StringEquatable: fmt::Debug {
    /// Whether the value equals `other`. `None` stands for an absent string.
    fn equals_str(&self, other: Option<&str>) -> bool;
}

/// Adapter that makes any [`fmt::Display`] type implicitly convertible.
///
/// # Example
///
/// ```rust
/// use equal_string::{equal_string, ActualValue, Displayed};
///
/// let port = Displayed(8080);
/// let result = equal_string("8080")
///     .evaluate(ActualValue::convertible(&port))
///     .unwrap();
/// assert!(result.succeeded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display + fmt::Debug> ConvertibleToString for Displayed<T> {
    fn convert_to_string(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// The value under test, classified by the string capability it exposes.
///
/// Variants are listed in the order the constraint tries them.
#[derive(Debug, Clone)]
pub enum ActualValue<'a> {
    /// No value at all.
    Absent,
    /// Already a string.
    NativeString(Cow<'a, str>),
    /// Converts itself to a string, which is then compared textually.
    ImplicitlyStringConvertible(&'a dyn ConvertibleToString),
    /// Tests equality against a string directly.
    StringEquatable(&'a dyn StringEquatable),
    /// Cannot be related to a string. Kept only for display.
    Opaque(&'a dyn fmt::Debug),
}

impl<'a> ActualValue<'a> {
    /// An absent actual value.
    pub fn absent() -> Self {
        ActualValue::Absent
    }

    /// A native string value.
    pub fn string(value: impl Into<Cow<'a, str>>) -> Self {
        ActualValue::NativeString(value.into())
    }

    /// A value that converts itself to a string.
    pub fn convertible<T: ConvertibleToString>(value: &'a T) -> Self {
        ActualValue::ImplicitlyStringConvertible(value)
    }

    /// A value that only supports direct equality against a string.
    pub fn equatable<T: StringEquatable>(value: &'a T) -> Self {
        ActualValue::StringEquatable(value)
    }

    /// A value with no string capability.
    pub fn opaque<T: fmt::Debug>(value: &'a T) -> Self {
        ActualValue::Opaque(value)
    }

    /// Returns `true` for [`ActualValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, ActualValue::Absent)
    }

    /// Short name of the variant, used in log output.
    pub fn shape(&self) -> &'static str {
        match self {
            ActualValue::Absent => "absent",
            ActualValue::NativeString(_) => "string",
            ActualValue::ImplicitlyStringConvertible(_) => "convertible",
            ActualValue::StringEquatable(_) => "equatable",
            ActualValue::Opaque(_) => "opaque",
        }
    }
}

impl<'a> From<&'a str> for ActualValue<'a> {
    fn from(value: &'a str) -> Self {
        ActualValue::NativeString(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ActualValue<'a> {
    fn from(value: &'a String) -> Self {
        ActualValue::NativeString(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for ActualValue<'_> {
    fn from(value: String) -> Self {
        ActualValue::NativeString(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for ActualValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        ActualValue::NativeString(value)
    }
}

impl<'a, T> From<Option<T>> for ActualValue<'a>
where
    T: Into<ActualValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ActualValue::Absent, Into::into)
    }
}
