//! Theme module for Contact Form Studio.
//!
//! - Spacing constants (`spacing`)
//! - Custom widget styles (`styles`)
//! - Fixed status colors used regardless of light/dark mode

pub mod spacing;
pub mod styles;

use iced::{Color, Theme};

pub use spacing::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN, FORM_WIDTH,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
};
pub use styles::{button_primary, summary_card, text_input_default, text_input_error};

// =============================================================================
// STATUS COLORS
// =============================================================================

/// Error red - validation messages and invalid input borders.
pub const ERROR: Color = Color {
    r: 0.80,
    g: 0.18,
    b: 0.18,
    a: 1.0,
};

/// Success green - summary card accent.
pub const SUCCESS: Color = Color {
    r: 0.13,
    g: 0.55,
    b: 0.33,
    a: 1.0,
};

/// Muted gray - field labels.
pub const GRAY_600: Color = Color {
    r: 0.42,
    g: 0.45,
    b: 0.50,
    a: 1.0,
};

/// Select the iced theme for the configured appearance.
pub fn app_theme(dark_mode: bool) -> Theme {
    if dark_mode { Theme::Dark } else { Theme::Light }
}
