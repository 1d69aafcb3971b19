//! Form field components.
//!
//! Input fields with labels, validation, and error display.

use iced::widget::{Space, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::{ERROR, GRAY_600, SPACING_XS, text_input_default, text_input_error};

// =============================================================================
// FORM FIELD
// =============================================================================

/// Creates a labeled text input.
///
/// # Arguments
///
/// * `label` - Field label text
/// * `value` - Current field value
/// * `placeholder` - Placeholder text
/// * `invalid` - Draw the error border
/// * `multiline` - Give the input extra height (for free text)
/// * `on_change` - Message factory for value changes
/// * `on_submit` - Message sent when Enter is pressed
pub fn form_field<'a, M: Clone + 'a>(
    label: String,
    value: &str,
    placeholder: &str,
    invalid: bool,
    multiline: bool,
    on_change: impl Fn(String) -> M + 'a,
    on_submit: M,
) -> Element<'a, M> {
    let label_text = text(label).size(13).color(GRAY_600);

    // Iced has no textarea; a padded text_input stands in for the message box
    let padding = if multiline { 18.0 } else { 10.0 };

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .on_submit(on_submit)
        .padding(padding)
        .width(Length::Fill)
        .style(if invalid {
            text_input_error
        } else {
            text_input_default
        });

    container(column![label_text, input].spacing(SPACING_XS))
        .width(Length::Fill)
        .into()
}

/// Creates an inline validation message with an alert icon.
pub fn error_text<'a, M: 'a>(message: String) -> Element<'a, M> {
    row![
        lucide::circle_alert().size(12).color(ERROR),
        Space::new().width(SPACING_XS),
        text(message).size(12).color(ERROR),
    ]
    .align_y(Alignment::Center)
    .into()
}
