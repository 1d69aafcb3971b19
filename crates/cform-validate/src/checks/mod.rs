//! Individual validation checks.
//!
//! Each check looks at one field value and returns an [`Issue`](crate::Issue)
//! when its rule applies to the field and fails.

pub mod format;
pub mod length;
pub mod presence;
