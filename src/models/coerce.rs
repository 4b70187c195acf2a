//! Field coercion for loosely-typed JSON records.
//!
//! Upstream records arrive as free-form JSON where numbers may be strings and
//! blank values stand for "not recorded". These helpers turn such fields into
//! explicit `Option`s so downstream code never has to guess.

use serde_json::Value;

/// Read a measurement. `0`, blanks, non-numeric text and non-finite numbers
/// all count as absent.
pub fn measurement(value: Option<&Value>) -> Option<f64> {
    count(value).filter(|v| *v != 0.0)
}

/// Read a numeric field where a literal zero is meaningful (parity, gravida).
pub fn count(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// True only for a numeric zero or the exact string `"0"`. Padded or
/// decimal spellings such as `" 0 "` and `"0.0"` do not match.
pub fn is_literal_zero(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s == "0",
        _ => false,
    }
}

/// Read a free-text field. Empty strings are absent; numbers are stringified.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
