//! Pattern checks.
//!
//! Only the email field has a format rule.

use std::sync::LazyLock;

use cform_model::Field;
use regex::Regex;

use crate::issue::Issue;

/// Email address pattern: a local part, `@`, and a dotted domain whose
/// labels do not start or end with a hyphen.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("Invalid email regex")
});

/// Check that a field value matches its format, if it has one.
///
/// Blank values are left to the presence check.
pub fn check(field: Field, value: &str) -> Option<Issue> {
    let value = value.trim();
    if field != Field::Email || value.is_empty() {
        return None;
    }
    (!is_valid_email(value)).then_some(Issue::InvalidEmail { field })
}

/// Whether a string looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
