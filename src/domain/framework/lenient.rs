//! Structural accessors for loosely-typed framework JSON.
//!
//! Framework outputs arrive from an LLM collaborator with no schema guarantee.
//! These helpers read by presence check: a key that is missing, `null` or of
//! the wrong type is simply treated as absent.

use serde_json::Value;

/// Looks up the first key in `keys` holding a non-null value.
pub(crate) fn field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let object = value.as_object()?;
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|v| !v.is_null())
}

/// Reads the first non-blank string stored under any of `keys`.
pub(crate) fn text(value: &Value, keys: &[&str]) -> Option<String> {
    let object = value.as_object()?;
    keys.iter()
        .filter_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Reads a string or number as display text.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a finite number, accepting numeric strings.
pub(crate) fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Returns the first array stored under any of `keys`, or an empty slice.
pub(crate) fn array<'a>(value: &'a Value, keys: &[&str]) -> &'a [Value] {
    value
        .as_object()
        .and_then(|object| {
            keys.iter()
                .find_map(|key| object.get(*key).and_then(Value::as_array))
        })
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Returns the first object stored under any of `keys`.
pub(crate) fn object<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let object = value.as_object()?;
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|v| v.is_object())
}
