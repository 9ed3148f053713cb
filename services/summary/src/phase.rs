//! Phase-level rollup.
//!
//! Every presentation surface (phase table, phase detail, exports) reads
//! phase totals from here rather than re-deriving unit costs, so all of
//! them agree on the same figures.

use costing_service::commission::CommissionSchedule;
use metrics_service::evaluator::evaluate_unit;
use metrics_service::ratios;
use rust_decimal::Decimal;
use shared::error::EngineError;
use shared::types::{PhaseInput, PhaseSummary, UnitTypeCatalog};
use tracing::debug;

/// Sum phase-total costs and revenue across every unit configuration in
/// the phase. Revenue is the true sum of resolved individual prices.
///
/// A configuration referencing a unit type absent from the catalog is a
/// structural fault the caller must fix; it is the one condition that
/// errors instead of degrading to zero.
pub fn summarize_phase(
    phase: &PhaseInput,
    catalog: &UnitTypeCatalog,
    schedule: &CommissionSchedule,
) -> Result<PhaseSummary, EngineError> {
    let mut total_units = 0u32;
    let mut total_costs = Decimal::ZERO;
    let mut total_revenue = Decimal::ZERO;

    for config in &phase.units {
        let unit_type = catalog
            .get(config.unit_type_id)
            .ok_or(EngineError::UnknownUnitType(config.unit_type_id))?;

        let evaluation = evaluate_unit(config, unit_type, schedule);
        total_units += config.quantity;
        total_costs += evaluation.phase_total.total_costs;
        total_revenue += evaluation.total_revenue;
    }

    let net_profit = ratios::net_profit(total_revenue, total_costs);
    let summary = PhaseSummary {
        phase_id: phase.phase_id,
        status: phase.status,
        total_units,
        total_costs,
        total_revenue,
        net_profit,
        margin: ratios::margin(net_profit, total_revenue),
        roi: ratios::roi(net_profit, total_costs),
    };

    debug!(
        phase_id = %summary.phase_id,
        total_units = summary.total_units,
        total_costs = %summary.total_costs,
        total_revenue = %summary.total_revenue,
        "phase summarized"
    );

    Ok(summary)
}
