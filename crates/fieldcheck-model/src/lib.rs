//! Data shapes shared by the validation runtime.
//!
//! Two types with no structural relationship: [`Value`], the dynamically
//! typed field value that validation rules inspect, and [`ValidationError`],
//! the aggregated result of one validation pass. The rule catalog in
//! `fieldcheck-validate` consumes `Value` and never constructs
//! `ValidationError`; which rules run against which fields, and how failures
//! are phrased, is decided by the model layer.

pub mod error;
pub mod value;

pub use error::{FieldErrors, ValidationError};
pub use value::Value;
