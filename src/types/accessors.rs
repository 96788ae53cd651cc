//! Tolerant field access over raw JSON payloads.
//!
//! Coinbase returns most numbers as strings and omits fields freely. These
//! helpers are only used where raw payloads are turned into domain records;
//! they return `None` instead of failing on missing or mistyped data.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// A string field, if present, a string, and non-empty.
pub fn safe_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// A decimal field, accepting decimal strings and JSON numbers.
pub fn safe_decimal(value: &Value, key: &str) -> Option<Decimal> {
    value.get(key).and_then(to_decimal)
}

/// Convert a JSON scalar into a decimal.
pub fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => parse_decimal(s),
        Value::Number(n) => parse_decimal(&n.to_string()),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
