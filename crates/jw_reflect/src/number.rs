use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

// -----------------------------------------------------------------------------
// Number

/// The closed numeric value model.
///
/// Every numeric scalar reflects into one of these variants regardless of its
/// source width; emission then normalizes all of them to plain decimal text
/// via [`decimal_text`](Number::decimal_text), so a `u8`, an `f32`, and a
/// [`Decimal`] holding the same quantity produce the same JSON token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Any signed integer up to 128 bits.
    Int(i128),
    /// Any unsigned integer up to 128 bits.
    UInt(u128),
    /// Any binary floating-point value.
    Float(f64),
    /// An exact decimal.
    Decimal(Decimal),
}

impl Number {
    /// The normalized decimal text of this number.
    ///
    /// Integers print in plain decimal. Floats convert through [`Decimal`]
    /// and are printed without trailing zeros, so `3.0_f64` becomes `3`.
    /// Decimals are likewise printed normalized.
    ///
    /// Returns `None` when the value has no finite decimal representation:
    /// NaN, the infinities, and float magnitudes beyond the decimal range.
    pub fn decimal_text(&self) -> Option<String> {
        match *self {
            Number::Int(value) => Some(value.to_string()),
            Number::UInt(value) => Some(value.to_string()),
            Number::Float(value) => Decimal::from_f64(value).map(|d| d.normalize().to_string()),
            Number::Decimal(value) => Some(value.normalize().to_string()),
        }
    }

    /// The float payload, when this number is a float.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Number::Float(value) => Some(value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
