//! Contact form state machine.
//!
//! ```text
//! Idle ──change──▶ Editing ──submit(valid)──▶ Submitted
//!                     │                          │
//!                     └──submit(invalid)──▶ EditingWithErrors
//!                                                │
//! Submitted ──change──▶ Editing (summary stays until the next valid submit)
//! ```
//!
//! The transitions are plain methods so they can be driven without a
//! running GUI.

use cform_model::{Field, FormState, SubmittedData};
use cform_validate::{Issue, ValidationErrors, ValidationRules, validate_field, validate_form};

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing typed yet.
    #[default]
    Idle,
    /// User is typing; no errors shown.
    Editing,
    /// Errors are shown.
    EditingWithErrors,
    /// Last submit passed validation.
    Submitted,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were captured into the summary and the form was cleared.
    Accepted(SubmittedData),
    /// Values failed validation; the form is unchanged.
    Rejected { error_count: usize },
}

/// State of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    /// Current input values.
    pub form: FormState,
    /// Active validation issues.
    pub errors: ValidationErrors,
    /// Last successfully submitted values.
    pub submitted: Option<SubmittedData>,
    /// Lifecycle phase.
    pub phase: FormPhase,
    /// Validation thresholds.
    pub rules: ValidationRules,
}

impl ContactFormState {
    /// Create an empty form using the given rules.
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Apply a keystroke (or paste) to a field.
    ///
    /// The first name is re-validated as soon as it has content, and also
    /// when it is emptied while showing an error, so the message under it
    /// always describes what is currently typed. Other fields keep their
    /// errors until the next submit.
    pub fn change_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();

        if field == Field::FirstName && (!value.is_empty() || self.errors.contains(field)) {
            let outcome = validate_field(field, &value, &self.rules);
            self.errors.update_field(field, outcome);
        }

        self.form.set(field, value);
        self.phase = if self.errors.is_empty() {
            FormPhase::Editing
        } else {
            FormPhase::EditingWithErrors
        };
    }

    /// Validate every field and, if all pass, capture the summary.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate_form(&self.form, &self.rules);

        if self.errors.is_empty() {
            let submitted = SubmittedData::capture(&self.form);
            self.submitted = Some(submitted.clone());
            self.form.clear();
            self.phase = FormPhase::Submitted;
            SubmitOutcome::Accepted(submitted)
        } else {
            self.phase = FormPhase::EditingWithErrors;
            SubmitOutcome::Rejected {
                error_count: self.errors.len(),
            }
        }
    }

    /// Active issue for a field.
    pub fn error_for(&self, field: Field) -> Option<&Issue> {
        self.errors.get(field)
    }

    /// Whether the summary view should be shown.
    pub fn has_summary(&self) -> bool {
        self.submitted.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(state: &mut ContactFormState, field: Field, text: &str) {
        let mut value = state.form.value(field).to_string();
        for ch in text.chars() {
            value.push(ch);
            state.change_field(field, value.clone());
        }
    }

    #[test]
    fn test_starts_idle() {
        let state = ContactFormState::default();
        assert_eq!(state.phase, FormPhase::Idle);
        assert!(state.errors.is_empty());
        assert!(!state.has_summary());
    }

    #[test]
    fn test_short_first_name_flags_while_typing() {
        let mut state = ContactFormState::default();
        type_into(&mut state, Field::FirstName, "will");
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.phase, FormPhase::EditingWithErrors);

        type_into(&mut state, Field::FirstName, "iam");
        assert!(state.errors.is_empty());
        assert_eq!(state.phase, FormPhase::Editing);
    }

    #[test]
    fn test_clearing_first_name_shows_required() {
        let mut state = ContactFormState::default();
        type_into(&mut state, Field::FirstName, "wi");
        state.change_field(Field::FirstName, "");
        assert_eq!(
            state.error_for(Field::FirstName),
            Some(&Issue::Required {
                field: Field::FirstName
            })
        );
    }

    #[test]
    fn test_other_fields_do_not_validate_on_change() {
        let mut state = ContactFormState::default();
        type_into(&mut state, Field::Email, "wwww");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_typing_other_fields_keeps_submit_errors() {
        let mut state = ContactFormState::default();
        state.submit();
        assert_eq!(state.errors.len(), 3);

        let keystrokes = [(Field::LastName, "Williams"), (Field::Email, "wmoon@yahoo.com")];
        for (field, text) in keystrokes {
            let mut value = String::new();
            for ch in text.chars() {
                value.push(ch);
                state.change_field(field, value.clone());

                assert!(state.errors.contains(Field::LastName));
                assert!(state.errors.contains(Field::Email));
                assert_eq!(state.errors.len(), 3);
                assert_eq!(state.phase, FormPhase::EditingWithErrors);
            }
        }
    }

    #[test]
    fn test_invalid_submit_keeps_values() {
        let mut state = ContactFormState::default();
        type_into(&mut state, Field::Email, "wwww");

        assert_eq!(state.submit(), SubmitOutcome::Rejected { error_count: 3 });
        assert_eq!(state.form.email, "wwww");
        assert!(!state.has_summary());
    }

    #[test]
    fn test_valid_submit_captures_and_clears() {
        let mut state = ContactFormState::default();
        type_into(&mut state, Field::FirstName, "William");
        type_into(&mut state, Field::LastName, "Williams");
        type_into(&mut state, Field::Email, "wmoon@yahoo.com");

        let SubmitOutcome::Accepted(submitted) = state.submit() else {
            panic!("expected submission to be accepted");
        };
        assert_eq!(submitted.first_name, "William");
        assert_eq!(state.phase, FormPhase::Submitted);
        assert!(state.form.is_empty());
        assert!(state.has_summary());

        type_into(&mut state, Field::LastName, "X");
        assert_eq!(state.phase, FormPhase::Editing);
        assert!(state.has_summary());
    }

    #[test]
    fn test_configured_minimum_is_used() {
        let rules = ValidationRules::new(2).unwrap();
        let mut state = ContactFormState::new(rules);
        type_into(&mut state, Field::FirstName, "Al");
        assert!(state.errors.is_empty());
    }
}
