//! String format rules: email, URL, UUID, timestamps, phone numbers.

use std::sync::LazyLock;

use fieldcheck_model::Value;
use regex::Regex;
use url::Url;

/// Deliberately permissive: something before the `@`, something after it,
/// and a dot somewhere in the domain part. Full RFC 5322 compliance is a
/// non-goal; the model layer relies on this exact level of strictness.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// Canonical 8-4-4-4-12 form, case-insensitive. Version/variant bits are
/// not checked.
static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("invalid uuid regex")
});

pub fn is_email(value: &Value) -> bool {
    value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s))
}

pub fn is_uuid(value: &Value) -> bool {
    value.as_str().is_some_and(|s| UUID_REGEX.is_match(s))
}

/// The string parses as an absolute URL. Relative references and anything
/// else the parser rejects come back as `false`, never as an error.
pub fn is_url(value: &Value) -> bool {
    value.as_str().is_some_and(|s| Url::parse(s).is_ok())
}

/// The string is an RFC 3339 timestamp (date, time, and offset).
pub fn is_date_string(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok())
}

/// 9 to 15 characters after trimming, drawn from digits, `+`, space, and
/// `-`. Loose on purpose: real phone number formats vary too much for a
/// stricter local check.
pub fn is_phone_number(value: &Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    let trimmed = s.trim();
    if trimmed.len() < 9 || trimmed.len() > 15 {
        return false;
    }
    trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || ch == '+' || ch == ' ' || ch == '-')
}
