//! Message module for Contact Form Studio.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions flow through these message types.

pub mod contact_form;

pub use contact_form::ContactFormMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Contact form messages
    ContactForm(ContactFormMessage),
}

impl Message {
    /// Creates a field change message.
    pub fn field_changed(field: cform_model::Field, value: String) -> Self {
        Self::ContactForm(ContactFormMessage::FieldChanged { field, value })
    }

    /// Creates a submit message.
    pub fn submit() -> Self {
        Self::ContactForm(ContactFormMessage::Submit)
    }
}
