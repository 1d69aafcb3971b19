//! Contact form validation.
//!
//! Validation is a pure function of the form values and the configured
//! [`ValidationRules`]. Nothing here touches the UI: the GUI crate calls
//! [`validate_form`] on submit and [`validate_field`] while the user types.
//!
//! Each field reports at most one [`Issue`]. Checks run in a fixed order
//! (presence, then length, then format) and the first failure wins, so a
//! blank email reports "is a required field" rather than a format error,
//! and a first name of only spaces reports the length message.
//!
//! # Example
//!
//! ```
//! use cform_model::{Field, FormState};
//! use cform_validate::{ValidationRules, validate_form};
//!
//! let form = FormState::new("Will", "", "wwww");
//! let errors = validate_form(&form, &ValidationRules::default());
//!
//! assert_eq!(errors.len(), 3);
//! assert_eq!(
//!     errors.get(Field::Email).map(|issue| issue.message()),
//!     Some("email must be a valid email address".to_string()),
//! );
//! ```

pub mod checks;
pub mod error;
pub mod errors;
pub mod issue;
pub mod rules;

use cform_model::{Field, FormState};

pub use error::RulesError;
pub use errors::ValidationErrors;
pub use issue::{Category, ERROR_PREFIX, Issue};
pub use rules::ValidationRules;

/// Validate a single field value.
///
/// Returns the first failing rule for the field, or `None` when it passes.
/// The optional message field always passes.
pub fn validate_field(field: Field, value: &str, rules: &ValidationRules) -> Option<Issue> {
    if let Some(issue) = checks::presence::check(field, value, rules) {
        return Some(issue);
    }
    if let Some(issue) = checks::length::check(field, value, rules) {
        return Some(issue);
    }
    checks::format::check(field, value)
}

/// Validate every field of the form.
pub fn validate_form(form: &FormState, rules: &ValidationRules) -> ValidationErrors {
    Field::all()
        .iter()
        .filter_map(|&field| validate_field(field, form.value(field), rules))
        .collect()
}
