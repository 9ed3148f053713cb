//! Numeric sanitation helpers.
//!
//! Callers hand the engine raw text from forms and stored records. The
//! parse-or-zero rule keeps garbage input from ever faulting arithmetic.

use rust_decimal::Decimal;

/// Parse a raw text field as a dollar or percentage figure, treating
/// anything unparseable (including empty input) as zero.
pub fn parse_or_zero(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Square footage used as a divisor or multiplier. Zero means the user
/// has not entered it yet; substitute 1 so conversions stay well-defined.
pub fn sq_ft_or_one(sq_ft: Decimal) -> Decimal {
    if sq_ft.is_zero() {
        Decimal::ONE
    } else {
        sq_ft
    }
}
