//! Configurable validation rules.

use cform_model::Field;
use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Default minimum length of the first name.
pub const DEFAULT_FIRST_NAME_MIN_LENGTH: usize = 5;

/// Tunable parts of the validation rules.
///
/// Which fields are required is fixed by [`Field::is_required`]; only
/// thresholds are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Minimum number of characters in the first name.
    pub first_name_min_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            first_name_min_length: DEFAULT_FIRST_NAME_MIN_LENGTH,
        }
    }
}

impl ValidationRules {
    /// Create rules with a custom first-name minimum.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::ZeroMinLength`] when `first_name_min_length` is zero.
    pub fn new(first_name_min_length: usize) -> Result<Self, RulesError> {
        let rules = Self {
            first_name_min_length,
        };
        rules.check()?;
        Ok(rules)
    }

    /// Check that the rules are usable.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::ZeroMinLength`] when a minimum length is zero.
    pub fn check(&self) -> Result<(), RulesError> {
        if self.first_name_min_length == 0 {
            return Err(RulesError::ZeroMinLength {
                field: Field::FirstName.name(),
            });
        }
        Ok(())
    }

    /// Minimum length for a field, if it has one.
    pub fn min_length(&self, field: Field) -> Option<usize> {
        match field {
            Field::FirstName => Some(self.first_name_min_length),
            Field::LastName | Field::Email | Field::Message => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_first_name_minimum() {
        let rules = ValidationRules::default();
        assert_eq!(rules.min_length(Field::FirstName), Some(5));
        assert_eq!(rules.min_length(Field::LastName), None);
        assert!(rules.check().is_ok());
    }

    #[test]
    fn test_zero_minimum_rejected() {
        assert_eq!(
            ValidationRules::new(0),
            Err(RulesError::ZeroMinLength { field: "firstName" })
        );
        assert!(ValidationRules::new(2).is_ok());
    }
}
