//! Unit-scaling numeric conversions
//!
//! A [`UnitConversion`] pairs a formula with an optional decimal precision.
//! Rounding is half away from zero (`f64::round` on the scaled value), so a
//! value sitting exactly on a `.xx5` boundary moves away from zero. Values
//! that are not exactly representable round according to their binary value.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::borrow::Cow;

/// Conversion formulas for unit transformations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionFormula {
    /// Linear formula: output = input * scale + offset
    Linear { scale: f64, offset: f64 },
    /// Ratio formula: output = input / divisor
    Ratio { divisor: f64 },
}

impl ConversionFormula {
    /// Evaluate the formula for a single input
    pub fn evaluate(&self, input: f64) -> f64 {
        match self {
            ConversionFormula::Linear { scale, offset } => input * scale + offset,
            ConversionFormula::Ratio { divisor } => input / divisor,
        }
    }
}

/// A conversion from one unit to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    pub from_unit: Cow<'static, str>,
    pub to_unit: Cow<'static, str>,
    pub formula: ConversionFormula,
    /// Number of decimal places to keep; `None` leaves the result unrounded
    pub precision: Option<u32>,
}

/// Bits per second to megabits per second, two decimal places
pub const BPS_TO_MBPS: UnitConversion = UnitConversion {
    from_unit: Cow::Borrowed("bps"),
    to_unit: Cow::Borrowed("mbps"),
    formula: ConversionFormula::Ratio { divisor: 1_000_000.0 },
    precision: Some(2),
};

impl UnitConversion {
    /// Apply the formula and rounding to a number
    pub fn convert(&self, input: f64) -> f64 {
        let raw = self.formula.evaluate(input);
        match self.precision {
            Some(places) => round_to(raw, places),
            None => raw,
        }
    }

    /// Apply the conversion to a JSON value.
    ///
    /// Numbers and numeric strings are accepted. The result must be finite to
    /// be representable as a JSON number.
    pub fn convert_value(&self, value: &Value) -> Result<Value> {
        let input = coerce_number(value)?;
        let converted = self.convert(input);
        Number::from_f64(converted).map(Value::Number).ok_or_else(|| {
            Error::conversion(
                format!("{} to {} produced a non-finite result", self.from_unit, self.to_unit),
                value,
            )
        })
    }
}

/// Round half away from zero to the given number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Read a number out of a JSON number or a numeric string
pub fn coerce_number(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::conversion("number is not representable as f64", value)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::conversion("string is not numeric", value)),
        _ => Err(Error::conversion(
            format!("cannot convert {} to a number", crate::error::value_kind(value)),
            value,
        )),
    }
}

/// Convert bits per second into megabits per second, rounded to two places
pub fn bps_to_mbps(value: f64) -> f64 {
    BPS_TO_MBPS.convert(value)
}

/// `bps_to_mbps` over any numeric-coercible value
pub fn bps_to_mbps_value(value: &Value) -> Result<f64> {
    coerce_number(value).map(bps_to_mbps)
}
