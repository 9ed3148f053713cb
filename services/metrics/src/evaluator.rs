//! Unit metrics aggregation.
//!
//! Combines a unit configuration's converted cost profile with its
//! revenue into per-unit and phase-total profitability.

use costing_service::commission::CommissionSchedule;
use costing_service::conversion::convert_line;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::numeric::sq_ft_or_one;
use shared::types::{ScenarioResult, UnitCostConfig, UnitTypeSpec};

use crate::ratios;

pub const PER_UNIT_LABEL: &str = "Per Unit";
pub const PHASE_TOTAL_LABEL: &str = "Phase Total";

/// Per-unit dollar figure for each cost category after conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub hard_costs: Decimal,
    pub soft_costs: Decimal,
    pub land_costs: Decimal,
    pub contingency_costs: Decimal,
    pub sales_costs: Decimal,
    pub lawyer_fees: Decimal,
    pub construction_financing: Decimal,
}

impl CostBreakdown {
    pub fn total(&self) -> Decimal {
        self.hard_costs
            + self.soft_costs
            + self.land_costs
            + self.contingency_costs
            + self.sales_costs
            + self.lawyer_fees
            + self.construction_financing
    }
}

/// Result of evaluating one unit configuration.
///
/// `total_revenue` is the true sum of the resolved individual prices;
/// `average_sales_price × quantity` only equals it when every unit sells
/// at the same price. Both are exposed because callers consume both forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEvaluation {
    pub per_unit: ScenarioResult,
    pub phase_total: ScenarioResult,
    pub breakdown: CostBreakdown,
    pub average_sales_price: Decimal,
    pub total_revenue: Decimal,
    pub quantity: u32,
}

/// Evaluate one unit configuration against its unit type.
///
/// Contingency is converted last among the additive categories: its
/// percentage base is the sum of the other converted per-unit costs
/// (hard, soft, land, lawyer). Sales cost follows the override-or-derive
/// rule: a user-entered value above zero is converted verbatim, otherwise
/// the tiered commission is computed per individual price and averaged —
/// commission is not linear, so averaging the prices first would be wrong.
pub fn evaluate_unit(
    config: &UnitCostConfig,
    unit_type: &UnitTypeSpec,
    schedule: &CommissionSchedule,
) -> UnitEvaluation {
    let sq_ft = sq_ft_or_one(Decimal::from(unit_type.square_footage));
    let divisor = Decimal::from(config.quantity.max(1));

    let hard_costs = convert_line(&config.hard_costs, sq_ft, None);
    let soft_costs = convert_line(&config.soft_costs, sq_ft, None);
    let land_costs = convert_line(&config.land_costs, sq_ft, None);
    let lawyer_fees = convert_line(&config.lawyer_fees, sq_ft, None);

    let contingency_base = hard_costs + soft_costs + land_costs + lawyer_fees;
    let contingency_costs =
        convert_line(&config.contingency_costs, sq_ft, Some(contingency_base));

    let construction_financing = if config.use_construction_financing {
        convert_line(&config.construction_financing, sq_ft, None)
    } else {
        Decimal::ZERO
    };

    let prices = config.resolved_prices();
    let total_revenue: Decimal = prices.iter().sum();
    let average_sales_price = total_revenue / divisor;

    let sales_costs = if config.sales_costs.value > Decimal::ZERO {
        convert_line(&config.sales_costs, sq_ft, None)
    } else {
        let total_commission: Decimal = prices
            .iter()
            .map(|price| schedule.tiered_commission(*price))
            .sum();
        total_commission / divisor
    };

    let breakdown = CostBreakdown {
        hard_costs,
        soft_costs,
        land_costs,
        contingency_costs,
        sales_costs,
        lawyer_fees,
        construction_financing,
    };

    let per_unit_costs = breakdown.total();
    let per_unit_profit = ratios::net_profit(average_sales_price, per_unit_costs);
    let per_unit = ScenarioResult {
        label: PER_UNIT_LABEL.to_string(),
        sales_price: average_sales_price,
        sales_costs,
        total_costs: per_unit_costs,
        net_profit: per_unit_profit,
        margin: ratios::margin(per_unit_profit, average_sales_price),
        roi: ratios::roi(per_unit_profit, per_unit_costs),
        profit_per_sq_ft: ratios::profit_per_sq_ft(per_unit_profit, sq_ft),
    };

    let phase_quantity = Decimal::from(config.quantity);
    let phase_costs = per_unit_costs * phase_quantity;
    let phase_profit = ratios::net_profit(total_revenue, phase_costs);
    let phase_total = ScenarioResult {
        label: PHASE_TOTAL_LABEL.to_string(),
        sales_price: total_revenue,
        sales_costs: sales_costs * phase_quantity,
        total_costs: phase_costs,
        net_profit: phase_profit,
        margin: ratios::margin(phase_profit, total_revenue),
        roi: ratios::roi(phase_profit, phase_costs),
        profit_per_sq_ft: ratios::profit_per_sq_ft(phase_profit, sq_ft * phase_quantity),
    };

    UnitEvaluation {
        per_unit,
        phase_total,
        breakdown,
        average_sales_price,
        total_revenue,
        quantity: config.quantity,
    }
}
