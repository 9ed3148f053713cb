//! Price-scenario calculator for a single unit type.
//!
//! The unit calculator models one unit type's profitability under several
//! named sale prices. Fixed costs are converted once; only the sales cost
//! varies per scenario when it is auto-derived from the tiered commission.

use costing_service::commission::CommissionSchedule;
use costing_service::conversion::convert_line;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::numeric::sq_ft_or_one;
use shared::types::{CostLineItem, ScenarioResult};

use crate::ratios;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceScenario {
    pub label: String,
    pub price: Decimal,
}

impl PriceScenario {
    pub fn new(label: impl Into<String>, price: Decimal) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

/// Cost profile of the unit type being modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub square_footage: Decimal,
    pub hard_costs: CostLineItem,
    pub soft_costs: CostLineItem,
    pub land_costs: CostLineItem,
    pub contingency_costs: CostLineItem,
    pub sales_costs: CostLineItem,
    pub lawyer_fees: CostLineItem,
    pub construction_financing: CostLineItem,
    pub use_construction_financing: bool,
}

/// Evaluate each priced scenario against the fixed cost profile.
///
/// Scenarios without a positive price are dropped; the rest are returned
/// sorted ascending by price. Sales cost per scenario follows the
/// override-or-derive rule against that scenario's own price.
pub fn evaluate_price_scenarios(
    inputs: &CalculatorInputs,
    scenarios: &[PriceScenario],
    schedule: &CommissionSchedule,
) -> Vec<ScenarioResult> {
    let sq_ft = sq_ft_or_one(inputs.square_footage);

    let hard_costs = convert_line(&inputs.hard_costs, sq_ft, None);
    let soft_costs = convert_line(&inputs.soft_costs, sq_ft, None);
    let land_costs = convert_line(&inputs.land_costs, sq_ft, None);
    let lawyer_fees = convert_line(&inputs.lawyer_fees, sq_ft, None);

    let contingency_base = hard_costs + soft_costs + land_costs + lawyer_fees;
    let contingency_costs =
        convert_line(&inputs.contingency_costs, sq_ft, Some(contingency_base));

    let construction_financing = if inputs.use_construction_financing {
        convert_line(&inputs.construction_financing, sq_ft, None)
    } else {
        Decimal::ZERO
    };

    let fixed_costs =
        hard_costs + soft_costs + land_costs + contingency_costs + lawyer_fees
            + construction_financing;

    let mut priced: Vec<&PriceScenario> = scenarios
        .iter()
        .filter(|s| s.price > Decimal::ZERO)
        .collect();
    priced.sort_by_key(|s| s.price);

    priced
        .into_iter()
        .map(|scenario| {
            let sales_costs = if inputs.sales_costs.value > Decimal::ZERO {
                convert_line(&inputs.sales_costs, sq_ft, None)
            } else {
                schedule.tiered_commission(scenario.price)
            };

            let total_costs = fixed_costs + sales_costs;
            let net_profit = ratios::net_profit(scenario.price, total_costs);

            ScenarioResult {
                label: scenario.label.clone(),
                sales_price: scenario.price,
                sales_costs,
                total_costs,
                net_profit,
                margin: ratios::margin(net_profit, scenario.price),
                roi: ratios::roi(net_profit, total_costs),
                profit_per_sq_ft: ratios::profit_per_sq_ft(net_profit, sq_ft),
            }
        })
        .collect()
}
