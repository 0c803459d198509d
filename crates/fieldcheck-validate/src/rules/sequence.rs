//! Sequence length rules.

use fieldcheck_model::Value;

pub fn array_min_length(value: &Value, min_length: usize) -> bool {
    value.as_array().is_some_and(|items| items.len() >= min_length)
}

pub fn array_max_length(value: &Value, max_length: usize) -> bool {
    value.as_array().is_some_and(|items| items.len() <= max_length)
}

pub fn array_length(value: &Value, length: usize) -> bool {
    value.as_array().is_some_and(|items| items.len() == length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Value {
        Value::Array(values.iter().map(|n| Value::Int(*n)).collect())
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(array_min_length(&ints(&[1, 2]), 2));
        assert!(!array_min_length(&ints(&[1]), 2));
        assert!(array_max_length(&ints(&[1, 2]), 2));
        assert!(!array_max_length(&ints(&[1, 2, 3]), 2));
        assert!(array_length(&ints(&[1, 2]), 2));
        assert!(!array_length(&ints(&[1, 2]), 3));
    }

    #[test]
    fn non_sequences_never_match() {
        assert!(!array_min_length(&Value::from("ab"), 1));
        assert!(!array_max_length(&Value::Int(1), 5));
        assert!(!array_length(&Value::Null, 0));
    }
}
