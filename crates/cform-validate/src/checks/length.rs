//! Minimum length checks.
//!
//! Length is counted in characters of the trimmed value, so "Zoë  " has
//! three characters.

use cform_model::Field;

use crate::issue::Issue;
use crate::rules::ValidationRules;

/// Check that a field reaches its configured minimum length.
pub fn check(field: Field, value: &str, rules: &ValidationRules) -> Option<Issue> {
    let min_length = rules.min_length(field)?;
    let actual = value.trim().chars().count();

    (actual < min_length).then_some(Issue::TooShort {
        field,
        min_length,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_characters_not_bytes() {
        let rules = ValidationRules::default();
        assert!(check(Field::FirstName, "Zoëèé", &rules).is_none());
        assert_eq!(
            check(Field::FirstName, " Zoë ", &rules),
            Some(Issue::TooShort {
                field: Field::FirstName,
                min_length: 5,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_fields_without_minimum_pass() {
        let rules = ValidationRules::default();
        assert!(check(Field::LastName, "W", &rules).is_none());
    }
}
