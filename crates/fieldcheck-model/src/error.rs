//! Aggregated validation failure.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field name -> failure message, in the order fields were recorded.
///
/// Downstream consumers (form rendering, API error bodies) display errors in
/// validation order, so the map must preserve insertion order. One message
/// per field: recording a second failure for the same field replaces the
/// message and keeps the field's original position.
pub type FieldErrors = IndexMap<String, String>;

/// The outcome of a validation pass in which at least one field failed.
///
/// Built once by the caller after every field has been evaluated, raised as a
/// single unit, and never mutated afterward. Constructing one with an empty
/// map is possible but meaningless; callers should return success instead
/// (see `ErrorCollector::finish` in `fieldcheck-validate`).
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("validation error")]
pub struct ValidationError {
    pub errors: FieldErrors,
}

impl ValidationError {
    pub fn new(errors: FieldErrors) -> Self {
        Self { errors }
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
