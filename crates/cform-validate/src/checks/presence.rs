//! Required field checks.
//!
//! A field with a minimum length is missing only when nothing was typed;
//! whitespace there is left to the length check, which counts it as zero
//! characters. Other required fields treat whitespace-only values as blank.

use cform_model::Field;

use crate::issue::Issue;
use crate::rules::ValidationRules;

/// Check that a required field has a value.
pub fn check(field: Field, value: &str, rules: &ValidationRules) -> Option<Issue> {
    if !field.is_required() {
        return None;
    }

    let missing = match rules.min_length(field) {
        Some(_) => value.is_empty(),
        None => value.trim().is_empty(),
    };
    missing.then_some(Issue::Required { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_required_field() {
        assert_eq!(
            check(Field::LastName, "  ", &ValidationRules::default()),
            Some(Issue::Required {
                field: Field::LastName
            })
        );
    }

    #[test]
    fn test_whitespace_first_name_is_not_missing() {
        let rules = ValidationRules::default();
        assert_eq!(check(Field::FirstName, "   ", &rules), None);
        assert_eq!(
            check(Field::FirstName, "", &rules),
            Some(Issue::Required {
                field: Field::FirstName
            })
        );
    }

    #[test]
    fn test_message_is_never_required() {
        assert_eq!(check(Field::Message, "", &ValidationRules::default()), None);
    }
}
