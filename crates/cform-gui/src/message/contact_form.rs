//! Contact form messages.

use cform_model::Field;

/// Messages emitted by the contact form view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormMessage {
    /// An input's content changed; `value` is the full new content.
    FieldChanged { field: Field, value: String },

    /// Submit button clicked, or Enter pressed in an input.
    Submit,
}
