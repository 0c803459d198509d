//! Numeric rules.

use fieldcheck_model::Value;

/// The value is numeric and not NaN.
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(n) => !n.is_nan(),
        _ => false,
    }
}

/// The value is an integral number. A float with a zero fractional part
/// counts (`2.0` is integral); NaN and infinities do not.
pub fn is_int(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(n) => n.fract() == 0.0,
        _ => false,
    }
}

/// The value is numeric with a non-zero fractional part. Mutually exclusive
/// with [`is_int`] for any value where [`is_number`] holds; both are false
/// for non-numeric input.
pub fn is_float(value: &Value) -> bool {
    is_number(value) && !is_int(value)
}

pub fn min(value: &Value, min: f64) -> bool {
    value.as_f64().is_some_and(|n| n >= min)
}

pub fn max(value: &Value, max: f64) -> bool {
    value.as_f64().is_some_and(|n| n <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_excludes_nan_and_non_numeric() {
        assert!(is_number(&Value::Int(42)));
        assert!(is_number(&Value::Float(-0.5)));
        assert!(!is_number(&Value::Float(f64::NAN)));
        assert!(!is_number(&Value::from("42")));
        assert!(!is_number(&Value::Null));
    }

    #[test]
    fn int_and_float_split_on_fractional_part() {
        assert!(is_int(&Value::Int(7)));
        assert!(is_int(&Value::Float(7.0)));
        assert!(!is_int(&Value::Float(7.5)));
        assert!(!is_int(&Value::from("abc")));

        assert!(is_float(&Value::Float(7.5)));
        assert!(!is_float(&Value::Float(7.0)));
        assert!(!is_float(&Value::Int(7)));
        assert!(!is_float(&Value::Float(f64::NAN)));
        assert!(!is_float(&Value::from("7.5")));
    }

    #[test]
    fn min_max_are_inclusive() {
        assert!(!min(&Value::Int(5), 10.0));
        assert!(min(&Value::Int(10), 10.0));
        assert!(max(&Value::Int(10), 10.0));
        assert!(!max(&Value::Int(11), 10.0));
        assert!(min(&Value::Float(0.5), 0.0));
        assert!(!min(&Value::from("10"), 10.0));
    }
}
