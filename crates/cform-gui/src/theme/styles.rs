//! Widget style functions.
//!
//! Style functions receive `&Theme` and derive colors from its extended
//! palette, so they follow the light/dark setting.

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Theme};

use super::spacing::{BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN};
use super::{ERROR, SUCCESS};

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - the submit action.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let (background, text_color) = match status {
        button::Status::Active => (palette.primary.base.color, palette.primary.base.text),
        button::Status::Hovered => (palette.primary.strong.color, palette.primary.strong.text),
        button::Status::Pressed => (palette.primary.weak.color, palette.primary.weak.text),
        button::Status::Disabled => (
            palette.background.strong.color,
            palette.background.strong.text,
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let (border_color, border_width) = match status {
        text_input::Status::Focused { .. } => (palette.primary.base.color, BORDER_WIDTH_MEDIUM),
        text_input::Status::Hovered => (palette.background.strong.color, BORDER_WIDTH_THIN),
        text_input::Status::Active | text_input::Status::Disabled => {
            (palette.background.weak.color, BORDER_WIDTH_THIN)
        }
    };

    text_input::Style {
        background: palette.background.base.color.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: palette.background.weak.text,
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

/// Text input style for a field with an active error.
pub fn text_input_error(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let mut style = text_input_default(theme, status);
    style.border.color = ERROR;
    style.border.width = BORDER_WIDTH_MEDIUM;
    style
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card around the submitted-values summary.
pub fn summary_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: SUCCESS,
        },
        ..Default::default()
    }
}
