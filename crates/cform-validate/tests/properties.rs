//! Property tests for the validation rules.

use cform_model::{Field, FormState};
use cform_validate::{Issue, ValidationRules, validate_field, validate_form};
use proptest::prelude::*;

proptest! {
    #[test]
    fn first_name_passes_at_minimum_length(name in "[A-Za-z]{5,40}") {
        prop_assert!(validate_field(Field::FirstName, &name, &ValidationRules::default()).is_none());
    }

    #[test]
    fn first_name_below_minimum_is_too_short(name in "[A-Za-z]{1,4}") {
        let issue = validate_field(Field::FirstName, &name, &ValidationRules::default());
        let is_too_short = matches!(issue, Some(Issue::TooShort { actual, .. }) if actual == name.len());
        prop_assert!(is_too_short);
    }

    #[test]
    fn whitespace_only_values_are_required(
        spaces in "[ \t]{0,10}",
        field in prop::sample::select(vec![Field::LastName, Field::Email]),
    ) {
        prop_assert_eq!(
            validate_field(field, &spaces, &ValidationRules::default()),
            Some(Issue::Required { field })
        );
    }

    #[test]
    fn whitespace_only_first_name_is_too_short(spaces in "[ \t]{1,10}") {
        prop_assert_eq!(
            validate_field(Field::FirstName, &spaces, &ValidationRules::default()),
            Some(Issue::TooShort { field: Field::FirstName, min_length: 5, actual: 0 })
        );
    }

    #[test]
    fn message_never_fails(message in ".{0,80}") {
        prop_assert!(validate_field(Field::Message, &message, &ValidationRules::default()).is_none());
    }

    #[test]
    fn error_count_matches_failing_fields(
        first in "[a-z]{0,8}",
        last in "[a-z]{0,3}",
        email in prop::sample::select(vec!["", "wwww", "wmoon@yahoo.com"]),
    ) {
        let form = FormState::new(first.clone(), last.clone(), email);
        let errors = validate_form(&form, &ValidationRules::default());

        let expected = usize::from(first.len() < 5)
            + usize::from(last.is_empty())
            + usize::from(email != "wmoon@yahoo.com");
        prop_assert_eq!(errors.len(), expected);
    }
}
