//! Contact Form Studio - Desktop GUI Application
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use cform_gui::App;
use cform_gui::logging::{init_logging, init_logging_with_writer};
use cform_gui::settings::Settings;
use iced::{Size, window};

/// Application entry point.
///
/// Loads settings (writing defaults on first launch), initializes logging
/// from them, then runs the Iced application.
pub fn main() -> iced::Result {
    let first_run = !Settings::config_path().exists();
    let (settings, load_error) = match Settings::try_load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    let log_config = settings.log_config();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}; logging to stderr");
        init_logging_with_writer(&log_config, std::io::stderr);
    }
    if let Some(e) = load_error {
        tracing::warn!("{e}; using default settings");
    } else if first_run {
        // Leave an editable file behind on first launch.
        if let Err(e) = settings.save() {
            tracing::warn!("{e}");
        }
    }

    tracing::info!("Starting Contact Form Studio");

    iced::application(
        move || App::with_settings(settings.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .font(iced_fonts::LUCIDE_FONT_BYTES)
    .window(window::Settings {
        size: Size::new(560.0, 760.0),
        min_size: Some(Size::new(420.0, 520.0)),
        ..Default::default()
    })
    .run()
}
