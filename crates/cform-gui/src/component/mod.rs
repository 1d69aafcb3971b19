//! Reusable UI components for Contact Form Studio.
//!
//! Components are plain functions returning `Element<M>`, generic over the
//! message type.
//!
//! - **Form**: `form_field`, `error_text`
//! - **Display**: `summary_card`

mod form_field;
mod summary;

pub use form_field::{error_text, form_field};
pub use summary::summary_card;
