//! Tiered sales commission.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use shared::settings::CommissionDefaults;

pub const DEFAULT_TIER1_RATE: Decimal = dec!(5);
pub const DEFAULT_TIER2_RATE: Decimal = dec!(3);

/// The tier boundary is fixed at $100,000. Saved scenarios were computed
/// against it, so it must not drift even when the rates do.
pub const TIER_BREAKPOINT: Decimal = dec!(100_000);

/// Commission rates applied below and above the tier breakpoint, as
/// numeric percentages (5 = 5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommissionSchedule {
    pub tier1_rate: Decimal,
    pub tier2_rate: Decimal,
    pub breakpoint: Decimal,
}

impl Default for CommissionSchedule {
    fn default() -> Self {
        Self {
            tier1_rate: DEFAULT_TIER1_RATE,
            tier2_rate: DEFAULT_TIER2_RATE,
            breakpoint: TIER_BREAKPOINT,
        }
    }
}

impl CommissionSchedule {
    /// Custom tier rates over the fixed breakpoint.
    pub fn new(tier1_rate: Decimal, tier2_rate: Decimal) -> Self {
        Self {
            tier1_rate,
            tier2_rate,
            breakpoint: TIER_BREAKPOINT,
        }
    }

    pub fn from_settings(defaults: &CommissionDefaults) -> Self {
        Self {
            tier1_rate: Decimal::from_f64_retain(defaults.tier1_rate)
                .unwrap_or(DEFAULT_TIER1_RATE),
            tier2_rate: Decimal::from_f64_retain(defaults.tier2_rate)
                .unwrap_or(DEFAULT_TIER2_RATE),
            breakpoint: Decimal::from_f64_retain(defaults.breakpoint).unwrap_or(TIER_BREAKPOINT),
        }
    }

    /// Commission in dollars for one sale price. Non-positive prices cost
    /// nothing to sell.
    pub fn tiered_commission(&self, sales_price: Decimal) -> Decimal {
        if sales_price <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let first_tier = sales_price.min(self.breakpoint);
        let balance = (sales_price - self.breakpoint).max(Decimal::ZERO);

        first_tier * self.tier1_rate / dec!(100) + balance * self.tier2_rate / dec!(100)
    }
}
