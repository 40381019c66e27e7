//! Lenient deserializers for sloppy backend payloads.
//!
//! The backend serializes ids, months, years, and amounts inconsistently:
//! sometimes JSON numbers, sometimes strings, occasionally absent. These
//! helpers accept either representation and fail closed to `None` (or a
//! zero amount) instead of rejecting the whole payload. A record that
//! cannot be keyed is later excluded from reconciliation grouping, which
//! is the intended behavior.
//!
//! Use with `#[serde(default, deserialize_with = "...")]`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        // Going through the number's string form keeps exact precision
        // and avoids touching floating point.
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Deserializes an id/foreign-key field that may be a number or a string.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_i64))
}

/// Deserializes an id field, treating anything unusable as 0.
pub fn i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_i64(deserializer)?.unwrap_or(0))
}

/// Deserializes a month field (no range check; grouping rejects bad months).
pub fn opt_month<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_i64(deserializer)?.and_then(|n| u32::try_from(n).ok()))
}

/// Deserializes a year field.
pub fn opt_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_i64(deserializer)?.and_then(|n| i32::try_from(n).ok()))
}

/// Deserializes an amount that may be a number or a string; unusable
/// values become zero rather than failing the load.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_decimal).unwrap_or_default())
}

/// Deserializes a boolean that may arrive as a bool, 0/1, or text.
/// Missing and unusable values fall back to `default`.
fn lenient_bool(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().map_or(default, |n| n != 0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => default,
        },
        _ => default,
    }
}

/// Default for boolean fields that should be `true` when absent; serde
/// only calls `deserialize_with` for present fields, so pair this with
/// `bool_or_true` via `#[serde(default = "json::default_true", ...)]`.
pub fn default_true() -> bool {
    true
}

/// Lenient boolean defaulting to `true` (the original treats a missing
/// `isActive` on employees as active).
pub fn bool_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(lenient_bool(value.as_ref(), true))
}

/// Lenient boolean defaulting to `false`.
pub fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(lenient_bool(value.as_ref(), false))
}
