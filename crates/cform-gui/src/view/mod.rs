//! View module for Contact Form Studio.
//!
//! Views are pure functions of state. [`document`] holds the queryable
//! document tree; [`contact_form`] maps it to widgets.

pub mod contact_form;
pub mod document;

pub use contact_form::view_contact_form;
pub use document::{Document, Node};
