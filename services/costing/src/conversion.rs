//! Cost conversion.
//!
//! Normalizes a raw cost figure plus its input method into an absolute
//! per-unit dollar amount. No validation happens here: inputs are assumed
//! already sanitized (see `shared::numeric`), and every numeric edge case
//! degrades to zero instead of faulting.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shared::types::{CostInputMethod, CostLineItem};

/// Convert a raw cost value into per-unit dollars.
///
/// `base_value` is only consulted for `Percentage`; a missing or zero base
/// yields zero. Used for the contingency category, which is a percentage
/// of the other converted costs.
pub fn convert(
    value: Decimal,
    method: CostInputMethod,
    square_footage: Decimal,
    base_value: Option<Decimal>,
) -> Decimal {
    match method {
        CostInputMethod::PerUnit => value,
        CostInputMethod::PerSqFt => value * square_footage,
        CostInputMethod::Percentage => match base_value {
            Some(base) if !base.is_zero() => value / dec!(100) * base,
            _ => Decimal::ZERO,
        },
    }
}

/// Convert one cost line item into per-unit dollars.
pub fn convert_line(
    line: &CostLineItem,
    square_footage: Decimal,
    base_value: Option<Decimal>,
) -> Decimal {
    convert(line.value, line.method, square_footage, base_value)
}
