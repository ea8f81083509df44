//! # equal-string
//!
//! An equal-string constraint for assertion libraries.
//!
//! The constraint compares an expected string with an actual value of arbitrary
//! shape. Strings are compared textually, optionally ignoring case and
//! white-space. Values that know how to turn themselves into a string are
//! converted first. Values that can only test equality against a string are asked
//! directly. Anything else never matches.
//!
//! ## Quick Example
//!
//! ```rust
//! use equal_string::{equal_string, ActualValue, ConvertibleToString};
//!
//! #[derive(Debug)]
//! struct Greeting(&'static str);
//!
//! impl ConvertibleToString for Greeting {
//!     fn convert_to_string(&self) -> Option<String> {
//!         Some(self.0.to_string())
//!     }
//! }
//!
//! let constraint = equal_string("Hello, World").ignore_case();
//!
//! // Plain strings
//! assert!(constraint.evaluate("hello, world").unwrap().succeeded());
//!
//! // Values that convert themselves
//! let greeting = Greeting("HELLO, WORLD");
//! assert!(constraint
//!     .evaluate(ActualValue::convertible(&greeting))
//!     .unwrap()
//!     .succeeded());
//!
//! // Failures carry a ready-made report
//! let result = constraint.evaluate("goodbye").unwrap();
//! assert!(!result.succeeded());
//! println!("{}", result);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events while evaluating
//! - `serde`: serialize results and (de)serialize constraints
//! - `proptest`: `Arbitrary` for [`EqualStringConstraint`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod compare;
pub mod constraint;
pub mod error;
pub mod format;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use constraint::{
    equal_string, ActualValue, ComparisonResult, ConvertibleToString, Displayed,
    EqualStringConstraint, StringEquatable,
};
pub use error::{ConstraintError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::constraint::{
        equal_string, ActualValue, ComparisonResult, ConvertibleToString, Displayed,
        EqualStringConstraint, StringEquatable,
    };
    pub use crate::error::ConstraintError;
}
