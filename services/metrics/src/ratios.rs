//! Guarded profitability ratios.
//!
//! Every downstream path (unit evaluation, phase and project summaries,
//! sensitivity ladders) computes margin, ROI and profit-per-square-foot
//! through these four functions, so a non-positive denominator always
//! yields zero and the formulas cannot drift between call sites.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn net_profit(sales_price: Decimal, total_costs: Decimal) -> Decimal {
    sales_price - total_costs
}

/// Net profit as a percentage of the sale price. Zero when there is no
/// price to divide by.
pub fn margin(net_profit: Decimal, sales_price: Decimal) -> Decimal {
    if sales_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    net_profit / sales_price * dec!(100)
}

/// Net profit as a percentage of total costs. Zero when there are no
/// costs to divide by.
pub fn roi(net_profit: Decimal, total_costs: Decimal) -> Decimal {
    if total_costs <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    net_profit / total_costs * dec!(100)
}

pub fn profit_per_sq_ft(net_profit: Decimal, square_footage: Decimal) -> Decimal {
    if square_footage <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    net_profit / square_footage
}
