//! Error types for rule configuration.

use thiserror::Error;

/// Validation rules that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A minimum length of zero would make the length rule meaningless.
    #[error("minimum length for {field} must be at least 1")]
    ZeroMinLength {
        /// Field identifier the rule applies to.
        field: &'static str,
    },
}
