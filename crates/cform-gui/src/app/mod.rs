//! Main application module for Contact Form Studio.
//!
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **Handlers own the logic** - `update()` only dispatches

use iced::{Element, Task, Theme};

use crate::handler::{ContactFormHandler, MessageHandler};
use crate::message::Message;
use crate::settings::Settings;
use crate::state::AppState;
use crate::theme::app_theme;
use crate::view::view_contact_form;

/// Window title.
pub const APP_TITLE: &str = "Contact Form Studio";

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance from loaded settings.
    ///
    /// Returns the initial state and any startup tasks.
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::with_settings(settings),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ContactForm(form_msg) => ContactFormHandler.handle(&mut self.state, form_msg),
        }
    }

    /// Render the application.
    pub fn view(&self) -> Element<'_, Message> {
        view_contact_form(&self.state)
    }

    /// Window title, with the active error count when there is one.
    pub fn title(&self) -> String {
        match self.state.contact_form.errors.len() {
            0 => APP_TITLE.to_string(),
            1 => format!("{APP_TITLE} (1 error)"),
            n => format!("{APP_TITLE} ({n} errors)"),
        }
    }

    /// Theme from settings.
    pub fn theme(&self) -> Theme {
        app_theme(self.state.settings.general.dark_mode)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(Settings::default()).0
    }
}
