//! Checked decimal arithmetic shared by every calculator.
//!
//! Values are promoted from `f64`/strings once at the boundary, all money
//! math runs on `Decimal`, and results are demoted back only when a caller
//! asks for an `f64`.

use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::error::NumericError;

/// Promote an ordinary number into the decimal domain.
pub fn from_f64(field: &str, value: f64) -> Result<Decimal, NumericError> {
    if !value.is_finite() {
        return Err(NumericError::NotFinite {
            field: field.into(),
        });
    }
    Decimal::from_f64(value).ok_or_else(|| NumericError::Overflow {
        context: field.into(),
    })
}

/// Parse a plain (`"1250.50"`) or scientific (`"1.2e5"`) numeric string.
pub fn parse(field: &str, text: &str) -> Result<Decimal, NumericError> {
    let trimmed = text.trim();
    let parsed = if trimmed.contains(|c: char| c == 'e' || c == 'E') {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };
    parsed.map_err(|_| NumericError::Malformed {
        field: field.into(),
        input: text.into(),
    })
}

/// Demote a decimal result back to `f64`.
pub fn to_f64(value: Decimal) -> Result<f64, NumericError> {
    value.to_f64().ok_or_else(|| NumericError::Overflow {
        context: format!("f64 conversion of {value}"),
    })
}

pub fn add(a: Decimal, b: Decimal, context: &str) -> Result<Decimal, NumericError> {
    a.checked_add(b).ok_or_else(|| overflow(context))
}

pub fn sub(a: Decimal, b: Decimal, context: &str) -> Result<Decimal, NumericError> {
    a.checked_sub(b).ok_or_else(|| overflow(context))
}

pub fn mul(a: Decimal, b: Decimal, context: &str) -> Result<Decimal, NumericError> {
    a.checked_mul(b).ok_or_else(|| overflow(context))
}

pub fn div(numerator: Decimal, denominator: Decimal, context: &str) -> Result<Decimal, NumericError> {
    if denominator.is_zero() {
        return Err(NumericError::DivisionByZero {
            context: context.into(),
        });
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| overflow(context))
}

/// `base^exponent`. Whole exponents go through exact repeated
/// multiplication; fractional ones fall back to `powd`. A negative base
/// has no real fractional power.
pub fn pow(base: Decimal, exponent: Decimal, context: &str) -> Result<Decimal, NumericError> {
    if exponent.fract().is_zero() {
        let n = exponent.to_i64().ok_or_else(|| overflow(context))?;
        if n < 0 && base.is_zero() {
            return Err(NumericError::DivisionByZero {
                context: context.into(),
            });
        }
        return base.checked_powi(n).ok_or_else(|| overflow(context));
    }
    if base < Decimal::ZERO {
        return Err(NumericError::Undefined {
            context: context.into(),
        });
    }
    base.checked_powd(exponent).ok_or_else(|| overflow(context))
}

/// Round to `dp` places, midpoints away from zero (2.5 -> 3, -2.5 -> -3).
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn overflow(context: &str) -> NumericError {
    NumericError::Overflow {
        context: context.into(),
    }
}
