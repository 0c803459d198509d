//! Presence and runtime-type rules.

use fieldcheck_model::Value;

/// A value is present. Absent fields and explicit nulls both arrive here as
/// `Value::Null`; everything else counts as present.
pub fn is_required(value: &Value) -> bool {
    !value.is_null()
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_only_null() {
        assert!(!is_required(&Value::Null));
        assert!(is_required(&Value::Bool(false)));
        assert!(is_required(&Value::Int(0)));
        assert!(is_required(&Value::Str(String::new())));
        assert!(is_required(&Value::Array(Vec::new())));
    }

    #[test]
    fn type_checks_match_variant_only() {
        assert!(is_boolean(&Value::Bool(true)));
        assert!(!is_boolean(&Value::Int(1)));
        assert!(is_string(&Value::from("text")));
        assert!(!is_string(&Value::Int(42)));
        assert!(is_array(&Value::Array(vec![Value::Int(1)])));
        assert!(!is_array(&Value::Int(42)));
        assert!(!is_array(&Value::from("[]")));
    }
}
