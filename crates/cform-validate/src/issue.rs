//! Validation issue types.
//!
//! The Issue enum provides type-safe issue creation where each variant
//! carries only its needed data. Issues are values shown to the user,
//! never errors returned to the caller.

use std::fmt;

use cform_model::Field;
use serde::{Deserialize, Serialize};

/// Prefix placed in front of every rendered issue.
pub const ERROR_PREFIX: &str = "Error: ";

/// Kind of rule an issue comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Field must not be blank
    Presence,
    /// Field must reach a minimum length
    Length,
    /// Field must match a pattern
    Format,
}

impl Category {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presence => "Presence",
            Self::Length => "Length",
            Self::Format => "Format",
        }
    }
}

/// Validation issue for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    /// Required field is blank
    Required { field: Field },
    /// Value is shorter than the configured minimum
    TooShort {
        field: Field,
        min_length: usize,
        actual: usize,
    },
    /// Value is not a usable email address
    InvalidEmail { field: Field },
}

impl Issue {
    /// Field the issue belongs to.
    pub fn field(&self) -> Field {
        match self {
            Issue::Required { field } => *field,
            Issue::TooShort { field, .. } => *field,
            Issue::InvalidEmail { field } => *field,
        }
    }

    /// Category for this issue type.
    pub fn category(&self) -> Category {
        match self {
            Issue::Required { .. } => Category::Presence,
            Issue::TooShort { .. } => Category::Length,
            Issue::InvalidEmail { .. } => Category::Format,
        }
    }

    /// Message without the error prefix.
    pub fn message(&self) -> String {
        match self {
            Issue::Required { field } => format!("{} is a required field", field.name()),
            Issue::TooShort {
                field, min_length, ..
            } => format!(
                "{} must have at least {} characters",
                field.name(),
                min_length
            ),
            Issue::InvalidEmail { field } => {
                format!("{} must be a valid email address", field.name())
            }
        }
    }

    /// Message as rendered under the input (`Error: ...`).
    pub fn display_text(&self) -> String {
        format!("{ERROR_PREFIX}{}", self.message())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
