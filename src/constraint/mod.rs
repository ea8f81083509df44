//! The equal-string constraint and the values it is evaluated against
//!
//! This module ties together the constraint configuration
//! ([`EqualStringConstraint`]), the classified actual value ([`ActualValue`])
//! and the outcome of an evaluation ([`ComparisonResult`]).
//!
//! # Example
//!
//! ```rust
//! use equal_string::constraint::*;
//!
//! #[derive(Debug)]
//! struct Version(u32, u32);
//!
//! impl ConvertibleToString for Version {
//!     fn convert_to_string(&self) -> Option<String> {
//!         Some(format!("{}.{}", self.0, self.1))
//!     }
//! }
//!
//! let result = equal_string("1.2")
//!     .evaluate(ActualValue::convertible(&Version(1, 2)))
//!     .unwrap();
//! assert!(result.succeeded());
//! ```

mod actual;
mod equal_string;
mod result;

pub use actual::{ActualValue, ConvertibleToString, Displayed, StringEquatable};
pub use equal_string::{equal_string, EqualStringConstraint};
pub use result::ComparisonResult;
