//! Money helpers using rust_decimal for precision
//!
//! Values arrive and leave as `f64`; arithmetic happens on `Decimal`.
//! Rounding to cents is a display concern and only happens in
//! [`round_for_display`] / [`format_currency`].

use rust_decimal::prelude::*;
use std::str::FromStr;

/// Display precision for currency values
const DECIMAL_PLACES: u32 = 2;

/// Largest amount (price, fixed discount, fixed commission) fed to pricing
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;
/// Largest percentage (discount or commission rate) fed to pricing
pub const MAX_RATE: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation.
///
/// Goes through the shortest round-trip representation so `2999.99_f64`
/// becomes exactly `2999.99`. NaN, infinities and out-of-range values
/// become zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or_default()
}

/// Pricing input to Decimal, clamped to `[-bound, bound]`.
///
/// Missing and non-finite values become zero. With amounts capped at
/// [`MAX_AMOUNT`] and rates at [`MAX_RATE`] no pricing product can leave
/// Decimal's range.
#[inline]
pub fn bounded_decimal(value: Option<f64>, bound: f64) -> Decimal {
    match value {
        Some(v) if v.is_finite() => to_decimal(v.clamp(-bound, bound)),
        _ => Decimal::ZERO,
    }
}

/// Round to cents (half away from zero)
#[inline]
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_display_f64(value: Decimal) -> f64 {
    round_for_display(value).to_f64().unwrap_or_default()
}

/// Format as USD with thousands separators, e.g. `$2,699.99`
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_for_display(value);
    let abs = rounded.abs();
    let whole = abs.trunc().to_u128().unwrap_or_default();
    let cents = (abs.fract() * Decimal::ONE_HUNDRED)
        .to_u64()
        .unwrap_or_default();

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents:02}")
}

/// Format an `f64` amount as currency
pub fn format_amount(value: f64) -> String {
    format_currency(to_decimal(value))
}
