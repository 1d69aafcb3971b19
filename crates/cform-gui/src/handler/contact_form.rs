//! Contact form message handler.

use iced::Task;

use super::MessageHandler;
use crate::logging::redact_value;
use crate::message::{ContactFormMessage, Message};
use crate::state::{AppState, SubmitOutcome};

/// Handler for contact form messages.
pub struct ContactFormHandler;

impl MessageHandler<ContactFormMessage> for ContactFormHandler {
    fn handle(&self, state: &mut AppState, msg: ContactFormMessage) -> Task<Message> {
        match msg {
            ContactFormMessage::FieldChanged { field, value } => {
                tracing::trace!(%field, value = redact_value(&value), "field changed");
                state.contact_form.change_field(field, value);
                if let Some(issue) = state.contact_form.error_for(field) {
                    tracing::debug!(%field, category = issue.category().label(), "field invalid");
                }
                Task::none()
            }

            ContactFormMessage::Submit => {
                match state.contact_form.submit() {
                    SubmitOutcome::Accepted(submitted) => {
                        tracing::info!(
                            email = redact_value(&submitted.email),
                            has_message = submitted.message.is_some(),
                            "contact form submitted"
                        );
                    }
                    SubmitOutcome::Rejected { error_count } => {
                        let fields: Vec<&str> = state
                            .contact_form
                            .errors
                            .fields()
                            .map(|f| f.name())
                            .collect();
                        tracing::debug!(error_count, ?fields, "contact form rejected");
                    }
                }
                Task::none()
            }
        }
    }
}
