//! Form field identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldParseError;

/// One of the four inputs on the contact form.
///
/// Declaration order is display order, and also the order in which
/// validation errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const fn all() -> &'static [Self] {
        &[Self::FirstName, Self::LastName, Self::Email, Self::Message]
    }

    /// Identifier used in error messages (`firstName`, `lastName`, ...).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Human-readable input label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Placeholder shown in an empty input.
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::FirstName => "Jane",
            Self::LastName => "Doe",
            Self::Email => "jane@example.com",
            Self::Message => "Say hello...",
        }
    }

    /// Whether the field must be filled in before the form can be submitted.
    pub const fn is_required(&self) -> bool {
        !matches!(self, Self::Message)
    }

    /// Whether the input accepts multi-line text.
    pub const fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Parse a field from its identifier or label.
    ///
    /// Accepts camelCase (`firstName`), snake_case (`first_name`) and the
    /// display label (`First Name`), case-insensitively.
    pub fn parse(s: &str) -> Result<Self, FieldParseError> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | ' ' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(FieldParseError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
