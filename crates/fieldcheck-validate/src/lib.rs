//! Validation rule registry and error aggregation for generated models.
//!
//! The model layer attaches named rules to fields and invokes them when a
//! model instance is constructed or updated. This crate supplies the rule
//! catalog ([`rules`], addressed by name through [`registry`]) and the
//! [`ErrorCollector`] that turns failing fields into one
//! [`ValidationError`](fieldcheck_model::ValidationError) per pass.

mod collector;
pub mod registry;
pub mod rules;

pub use collector::ErrorCollector;
pub use registry::{Registry, RuleFn, RuleName, registry};
