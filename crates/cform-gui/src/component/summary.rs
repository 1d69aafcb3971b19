//! Submitted-values summary card.

use iced::widget::{Column, column, container, row, text};
use iced::{Element, Length};

use crate::theme::{
    GRAY_600, SPACING_MD, SPACING_SM, SPACING_XS, SUCCESS, summary_card as card_style,
};

/// Creates the read-only summary card.
///
/// `entries` are `(label, value)` pairs, already in display order.
pub fn summary_card<'a, M: 'a>(heading: String, entries: Vec<(String, String)>) -> Element<'a, M> {
    let rows = entries.into_iter().map(|(label, value)| -> Element<'a, M> {
        row![text(label).size(13).color(GRAY_600), text(value).size(14)]
            .spacing(SPACING_SM)
            .into()
    });

    let content = column![
        text(heading).size(16).color(SUCCESS),
        Column::with_children(rows).spacing(SPACING_XS),
    ]
    .spacing(SPACING_SM);

    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card_style)
        .into()
}
