//! GUI-specific error types.
//!
//! Form validation never produces these: invalid input is shown inline as
//! issues. `GuiError` covers the application shell around the form
//! (settings persistence, logging setup).

use cform_validate::RulesError;
use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to load settings.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    /// Settings contain validation rules that cannot be applied.
    #[error("Invalid validation settings: {0}")]
    InvalidRules(#[from] RulesError),

    // =========================================================================
    // LOGGING
    // =========================================================================
    /// Log file could not be opened.
    #[error("Cannot open log file {path}: {reason}")]
    LogFile {
        /// Path that could not be opened.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Check if the application can carry on with defaults after this error.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::SettingsLoad { .. } | Self::InvalidRules(_) | Self::LogFile { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_error_converts() {
        let err: GuiError = RulesError::ZeroMinLength { field: "firstName" }.into();
        assert!(err.is_transient());
        assert_eq!(
            err.to_string(),
            "Invalid validation settings: minimum length for firstName must be at least 1"
        );
    }

    #[test]
    fn test_save_failure_is_not_transient() {
        let err = GuiError::SettingsSave {
            reason: "read-only".to_string(),
        };
        assert!(!err.is_transient());
    }
}
