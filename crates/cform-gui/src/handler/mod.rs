//! Message handler architecture for Iced-based GUI.
//!
//! Handlers keep message handling logic out of the main `App` struct and
//! can be exercised without a window:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::ContactForm(msg) => ContactFormHandler.handle(&mut self.state, msg),
//!     }
//! }
//! ```

mod contact_form;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use contact_form::ContactFormHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// # Returns
    ///
    /// A `Task<Message>` for any async follow-up work, or `Task::none()` if complete.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
