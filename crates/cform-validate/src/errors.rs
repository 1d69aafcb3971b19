//! Per-field collection of active issues.

use std::collections::BTreeMap;

use cform_model::Field;
use serde::{Deserialize, Serialize};

use crate::issue::Issue;

/// Active validation issues, at most one per field.
///
/// Iteration follows field display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    issues: BTreeMap<Field, Issue>,
}

impl ValidationErrors {
    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue for a field, if it is failing.
    pub fn get(&self, field: Field) -> Option<&Issue> {
        self.issues.get(&field)
    }

    /// Whether a field is failing.
    pub fn contains(&self, field: Field) -> bool {
        self.issues.contains_key(&field)
    }

    /// Record an issue, replacing any previous issue for the same field.
    pub fn insert(&mut self, issue: Issue) {
        self.issues.insert(issue.field(), issue);
    }

    /// Replace the state of one field with the outcome of re-validating it.
    pub fn update_field(&mut self, field: Field, outcome: Option<Issue>) {
        match outcome {
            Some(issue) => {
                self.issues.insert(field, issue);
            }
            None => {
                self.issues.remove(&field);
            }
        }
    }

    /// Drop all issues.
    pub fn clear(&mut self) {
        self.issues.clear();
    }

    /// Iterate issues in field order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.values()
    }

    /// Failing fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.issues.keys().copied()
    }
}

impl FromIterator<Issue> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        let mut errors = Self::default();
        for issue in iter {
            errors.insert(issue);
        }
        errors
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Issue;
    type IntoIter = std::collections::btree_map::Values<'a, Field, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.values()
    }
}
