//! String content and length rules.
//!
//! Length rules count Unicode scalar values, not bytes, so a multi-byte
//! character contributes one to the length.

use fieldcheck_model::Value;

/// Strings: non-blank after trimming. Sequences: at least one element.
/// Any other variant is never "not empty" — unknown types stay conservative.
pub fn is_not_empty(value: &Value) -> bool {
    match value {
        Value::Str(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

pub fn length(value: &Value, length: usize) -> bool {
    value.as_str().is_some_and(|s| s.chars().count() == length)
}

pub fn min_length(value: &Value, min_length: usize) -> bool {
    value.as_str().is_some_and(|s| s.chars().count() >= min_length)
}

pub fn max_length(value: &Value, max_length: usize) -> bool {
    value.as_str().is_some_and(|s| s.chars().count() <= max_length)
}
