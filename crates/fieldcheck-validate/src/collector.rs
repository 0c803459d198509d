//! Field failure aggregation.
//!
//! Generated model code runs its rules field by field and records each
//! failure here. One validation pass produces at most one
//! [`ValidationError`], and none at all when every field passed.

use fieldcheck_model::{FieldErrors, ValidationError};

/// Collects per-field failures during a single validation pass.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: FieldErrors,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field. A second failure for the same field
    /// replaces the message and keeps the field's original position.
    pub fn record(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        tracing::debug!(field = %field, message = %message, "field failed validation");
        self.errors.insert(field, message);
    }

    /// Record a failure only when `passed` is false. Mirrors the
    /// run-rule-then-record loop generated model code uses.
    pub fn check(&mut self, passed: bool, field: &str, message: &str) {
        if !passed {
            self.record(field, message);
        }
    }

    /// True when no field has failed so far.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// End the validation pass. `Ok(())` when nothing was recorded; a
    /// `ValidationError` is only ever raised with at least one failing field.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        tracing::debug!(fields = self.errors.len(), "validation pass failed");
        Err(ValidationError::new(self.errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pass_is_ok() {
        let collector = ErrorCollector::new();
        assert!(collector.is_empty());
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn failures_keep_insertion_order() {
        let mut collector = ErrorCollector::new();
        collector.record("email", "must be a valid email");
        collector.record("age", "must be >= 0");

        let err = collector.finish().expect_err("two failures recorded");
        let fields: Vec<&str> = err.errors.keys().map(String::as_str).collect();
        assert_eq!(fields, ["email", "age"]);
    }

    #[test]
    fn check_records_only_on_failure() {
        let mut collector = ErrorCollector::new();
        collector.check(true, "name", "name is required");
        collector.check(false, "age", "age must be a number");

        let err = collector.finish().expect_err("one failure recorded");
        assert_eq!(err.len(), 1);
        assert!(err.errors.contains_key("age"));
    }
}
