//! Contact form view.
//!
//! Layout, top to bottom:
//! - Header
//! - The four inputs, each followed by its error message
//! - Submit button
//! - Summary card (after the first valid submit)

use iced::widget::{Column, Space, button, container, scrollable, text};
use iced::{Element, Length};

use crate::component::{error_text, form_field, summary_card};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{FORM_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, button_primary};

use super::document::{Document, Node};

/// Render the contact form.
pub fn view_contact_form(state: &AppState) -> Element<'_, Message> {
    let document = Document::render(&state.contact_form);

    let mut form = Column::new().spacing(SPACING_SM);
    let mut summary_heading = None;
    let mut summary_entries = Vec::new();

    for node in document.into_nodes() {
        match node {
            Node::Heading(title) => {
                form = form.push(text(title).size(28));
                form = form.push(Space::new().height(SPACING_SM));
            }
            Node::Input {
                field,
                label,
                value,
                placeholder,
                invalid,
            } => {
                form = form.push(form_field(
                    label,
                    &value,
                    &placeholder,
                    invalid,
                    field.is_multiline(),
                    move |value| Message::field_changed(field, value),
                    Message::submit(),
                ));
            }
            Node::ErrorText { text, .. } => {
                form = form.push(error_text(text));
            }
            Node::Button { label } => {
                form = form.push(
                    container(
                        button(text(label).size(14))
                            .on_press(Message::submit())
                            .padding([SPACING_SM, SPACING_LG])
                            .style(button_primary),
                    )
                    .padding([SPACING_MD, 0.0]),
                );
            }
            Node::SummaryHeading(heading) => summary_heading = Some(heading),
            Node::SummaryEntry { label, value, .. } => summary_entries.push((label, value)),
        }
    }

    if let Some(heading) = summary_heading {
        form = form.push(summary_card(heading, summary_entries));
    }

    let content = container(form).max_width(FORM_WIDTH);

    scrollable(container(content).center_x(Length::Fill).padding(SPACING_XL)).into()
}
