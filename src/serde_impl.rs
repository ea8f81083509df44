//! Serde support for constraints and results (feature-gated)
//!
//! [`ComparisonResult`] serializes as a flat record suitable for test reports.
//! [`EqualStringConstraint`] round-trips through serde, with every modifier
//! optional on input and defaulting the same way the builder does.
//!
//! # Example
//!
//! ```rust,ignore
//! use equal_string::{equal_string, EqualStringConstraint};
//!
//! let constraint: EqualStringConstraint =
//!     serde_json::from_str(r#"{"expected":"abc","case_insensitive":true}"#).unwrap();
//! assert_eq!(constraint, equal_string("abc").ignore_case());
//!
//! let result = constraint.evaluate("ABC").unwrap();
//! let json = serde_json::to_string(&result).unwrap();
//! assert!(json.contains(r#""succeeded":true"#));
//! ```

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ComparisonResult, EqualStringConstraint};

impl Serialize for ComparisonResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComparisonResult", 7)?;
        state.serialize_field("succeeded", &self.succeeded)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("actual_value", &self.actual_value)?;
        state.serialize_field("difference_index", &self.difference_index)?;
        state.serialize_field("case_insensitive", &self.case_insensitive)?;
        state.serialize_field("ignore_whitespace", &self.ignore_whitespace)?;
        state.serialize_field("clip_on_display", &self.clip_on_display)?;
        state.end()
    }
}

impl Serialize for EqualStringConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EqualStringConstraint", 4)?;
        state.serialize_field("expected", &self.expected)?;
        state.serialize_field("case_insensitive", &self.case_insensitive)?;
        state.serialize_field("ignore_whitespace", &self.ignore_whitespace)?;
        state.serialize_field("clip_on_display", &self.clip_on_display)?;
        state.end()
    }
}

fn default_clip() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConstraintRepr {
    expected: Option<String>,
    #[serde(default)]
    case_insensitive: bool,
    #[serde(default)]
    ignore_whitespace: bool,
    #[serde(default = "default_clip")]
    clip_on_display: bool,
}

impl<'de> Deserialize<'de> for EqualStringConstraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ConstraintRepr::deserialize(deserializer)?;
        Ok(EqualStringConstraint {
            expected: repr.expected,
            case_insensitive: repr.case_insensitive,
            ignore_whitespace: repr.ignore_whitespace,
            clip_on_display: repr.clip_on_display,
        })
    }
}
