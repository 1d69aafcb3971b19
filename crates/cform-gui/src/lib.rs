//! Contact Form Studio - GUI Library
//!
//! A desktop contact form with inline validation and a submitted-values
//! summary. Built with Iced 0.14.0 using the Elm architecture.
//!
//! The form logic is usable without a window: drive [`app::App::update`]
//! with [`message::Message`]s and inspect [`view::Document::render`].

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
pub use error::GuiError;
pub use message::{ContactFormMessage, Message};
pub use settings::Settings;
pub use state::{ContactFormState, FormPhase};
pub use view::Document;
