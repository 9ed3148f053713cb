//! Sensitivity ladder generation.
//!
//! Builds a symmetric ladder of priced scenarios around a base case and
//! re-evaluates profitability at each rung. Sales costs are scaled by the
//! base case's sales-cost-to-price ratio rather than re-running the tier
//! formula; saved analyses were produced with that approximation and the
//! ladders must match them.

use metrics_service::ratios;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use shared::settings::SensitivityDefaults;
use shared::types::ScenarioResult;

pub const BASE_CASE_LABEL: &str = "Base Case";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Percentage,
    Dollar,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityStep {
    pub kind: StepKind,
    pub value: Decimal,
}

impl SensitivityStep {
    pub fn percentage(value: Decimal) -> Self {
        Self {
            kind: StepKind::Percentage,
            value,
        }
    }

    pub fn dollars(value: Decimal) -> Self {
        Self {
            kind: StepKind::Dollar,
            value,
        }
    }

    pub fn from_settings(defaults: &SensitivityDefaults) -> Self {
        Self::percentage(Decimal::from_f64_retain(defaults.step_value).unwrap_or(dec!(10)))
    }

    fn unit_suffix(&self) -> &'static str {
        match self.kind {
            StepKind::Percentage => "%",
            StepKind::Dollar => "$",
        }
    }
}

/// Generate `count` scenarios symmetric around the base case's price.
///
/// An odd count includes the exact base case in the middle; an even count
/// skips it so the base is not duplicated. Rungs whose adjusted price is
/// not positive are discarded, as is the whole ladder when the base case
/// has no positive price.
pub fn generate_ladder(
    base: &ScenarioResult,
    step: &SensitivityStep,
    count: u32,
    square_footage: Decimal,
) -> Vec<ScenarioResult> {
    let base_price = base.sales_price;
    if base_price <= Decimal::ZERO {
        return Vec::new();
    }

    let sales_cost_ratio = base.sales_costs / base_price;
    let fixed_costs = base.total_costs - base.sales_costs;

    let half = i64::from(count / 2);
    let mut scenarios = Vec::with_capacity(count as usize);

    for i in -half..=half {
        if i == 0 && count % 2 == 0 {
            continue;
        }

        let offset = step.value * Decimal::from(i);
        let adjusted_price = match step.kind {
            StepKind::Percentage => base_price * (Decimal::ONE + offset / dec!(100)),
            StepKind::Dollar => base_price + offset,
        };

        if adjusted_price <= Decimal::ZERO {
            continue;
        }

        let sales_costs = adjusted_price * sales_cost_ratio;
        let total_costs = fixed_costs + sales_costs;
        let net_profit = ratios::net_profit(adjusted_price, total_costs);

        let magnitude = (step.value * Decimal::from(i.unsigned_abs())).normalize();
        let label = if i == 0 {
            BASE_CASE_LABEL.to_string()
        } else if i < 0 {
            format!("{}{} Lower", magnitude, step.unit_suffix())
        } else {
            format!("{}{} Higher", magnitude, step.unit_suffix())
        };

        scenarios.push(ScenarioResult {
            label,
            sales_price: adjusted_price,
            sales_costs,
            total_costs,
            net_profit,
            margin: ratios::margin(net_profit, adjusted_price),
            roi: ratios::roi(net_profit, total_costs),
            profit_per_sq_ft: ratios::profit_per_sq_ft(net_profit, square_footage),
        });
    }

    scenarios
}
