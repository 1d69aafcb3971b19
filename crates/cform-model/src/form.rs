//! Form values and the submitted snapshot.

use serde::{Deserialize, Serialize};

use crate::field::Field;

// =============================================================================
// FORM STATE
// =============================================================================

/// Current values of the four inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    /// Create a form with the three required fields filled in.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: String::new(),
        }
    }

    /// Set the optional message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Current value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when every input is empty.
    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|f| self.value(*f).is_empty())
    }

    /// Empty every input.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The message, if one with visible content was entered.
    pub fn message(&self) -> Option<&str> {
        non_blank(&self.message)
    }
}

// =============================================================================
// SUBMITTED DATA
// =============================================================================

/// Snapshot of a form that passed validation.
///
/// `message` is `None` when the message input was left blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmittedData {
    /// Capture the current form values.
    ///
    /// The email is stored trimmed, the same value the format check matched.
    pub fn capture(form: &FormState) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.trim().to_string(),
            message: form.message().map(str::to_string),
        }
    }

    /// Submitted values in display order, skipping an absent message.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::FirstName, Some(self.first_name.as_str())),
            (Field::LastName, Some(self.last_name.as_str())),
            (Field::Email, Some(self.email.as_str())),
            (Field::Message, self.message.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

impl From<&FormState> for SubmittedData {
    fn from(form: &FormState) -> Self {
        Self::capture(form)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}
