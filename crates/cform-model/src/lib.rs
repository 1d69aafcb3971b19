//! Data model for the contact form.
//!
//! This crate holds the plain data the form works with and nothing else:
//! no validation, no rendering.
//!
//! # Module Organization
//!
//! - [`field`]: The four form fields and their display metadata
//! - [`form`]: Live form values ([`FormState`]) and the submitted snapshot ([`SubmittedData`])
//! - [`error`]: Parse errors for field identifiers
//!
//! # Example
//!
//! ```
//! use cform_model::{Field, FormState, SubmittedData};
//!
//! let mut form = FormState::default();
//! form.set(Field::FirstName, "William");
//! form.set(Field::Email, "wmoon@yahoo.com");
//!
//! let submitted = SubmittedData::capture(&form);
//! assert_eq!(submitted.first_name, "William");
//! assert!(submitted.message.is_none());
//! ```

pub mod error;
pub mod field;
pub mod form;

pub use error::FieldParseError;
pub use field::Field;
pub use form::{FormState, SubmittedData};
