//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use crate::settings::Settings;

use super::ContactFormState;

/// Top-level application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The contact form.
    pub contact_form: ContactFormState,
    /// Application settings (persisted)
    pub settings: Settings,
}

impl AppState {
    /// Create state from loaded settings.
    ///
    /// The form picks up the configured validation thresholds.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            contact_form: ContactFormState::new(settings.validation),
            settings,
        }
    }
}
