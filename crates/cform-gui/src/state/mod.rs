//! State module for Contact Form Studio.
//!
//! All state lives here and is only mutated from `update()` (through the
//! message handlers). Views read it and never write it.

mod app_state;
mod contact_form;

pub use app_state::AppState;
pub use contact_form::{ContactFormState, FormPhase, SubmitOutcome};
