//! Error types for the form model.

use thiserror::Error;

/// A field identifier could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field '{input}' (expected one of: firstName, lastName, email, message)")]
pub struct FieldParseError {
    /// The rejected input, as given.
    pub input: String,
}
