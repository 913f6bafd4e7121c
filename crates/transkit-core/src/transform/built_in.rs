//! Built-in key and value functions
//!
//! Pre-configured functions that compose the case and unit conversions into
//! the shapes [`transform_dict`](super::transform_dict) expects.
//!
//! Copyright (c) 2025 Transkit Team
//! Licensed under the Apache-2.0 license

use crate::case::{coerce_to_text, CaseStyle};
use crate::units::BPS_TO_MBPS;
use crate::Result;
use serde_json::Value;

/// Convert every key to snake_case with the given delimiter
pub fn snake_case_keys(delimiter: impl Into<String>) -> impl Fn(&str) -> Result<String> {
    case_keys(CaseStyle::Snake, delimiter)
}

/// Convert every key to camelCase, splitting on the given delimiter
pub fn camel_case_keys(delimiter: impl Into<String>) -> impl Fn(&str) -> Result<String> {
    case_keys(CaseStyle::Camel, delimiter)
}

/// Convert every key to the given case style
pub fn case_keys(style: CaseStyle, delimiter: impl Into<String>) -> impl Fn(&str) -> Result<String> {
    let delimiter = delimiter.into();
    move |key: &str| Ok(style.apply(key, &delimiter))
}

/// Convert every value to snake_case text.
///
/// Non-string values are coerced to text first, so `42` becomes `"42"`.
pub fn snake_case_values(delimiter: impl Into<String>) -> impl Fn(&Value) -> Result<Value> {
    case_values(CaseStyle::Snake, delimiter)
}

/// Convert every value to camelCase text, coercing non-strings first
pub fn camel_case_values(delimiter: impl Into<String>) -> impl Fn(&Value) -> Result<Value> {
    case_values(CaseStyle::Camel, delimiter)
}

/// Convert every value to the given case style, coercing non-strings first
pub fn case_values(style: CaseStyle, delimiter: impl Into<String>) -> impl Fn(&Value) -> Result<Value> {
    let delimiter = delimiter.into();
    move |value: &Value| Ok(Value::String(style.apply(&coerce_to_text(value), &delimiter)))
}

/// Replace every value with its textual form
pub fn stringify_value(value: &Value) -> Result<Value> {
    Ok(Value::String(coerce_to_text(value)))
}

/// Convert every value from bits per second to megabits per second.
///
/// Fails on the first value that is not numeric.
pub fn bps_to_mbps_values(value: &Value) -> Result<Value> {
    BPS_TO_MBPS.convert_value(value)
}
