//! Project-level rollup across phase summaries.

use metrics_service::ratios;
use rust_decimal::Decimal;
use shared::types::{PhaseStatus, PhaseSummary, ProjectSummary};
use tracing::debug;

/// Sum phase summaries into project totals and count completed phases.
/// Ratios are returned unrounded; rendering precision is the caller's
/// concern.
pub fn summarize_project(phases: &[PhaseSummary]) -> ProjectSummary {
    let completed_phases = phases
        .iter()
        .filter(|p| p.status == PhaseStatus::Completed)
        .count() as u32;

    let mut total_units = 0u32;
    let mut total_costs = Decimal::ZERO;
    let mut total_revenue = Decimal::ZERO;

    for phase in phases {
        total_units += phase.total_units;
        total_costs += phase.total_costs;
        total_revenue += phase.total_revenue;
    }

    let net_profit = ratios::net_profit(total_revenue, total_costs);
    let summary = ProjectSummary {
        total_phases: phases.len() as u32,
        completed_phases,
        total_units,
        total_costs,
        total_revenue,
        net_profit,
        overall_margin: ratios::margin(net_profit, total_revenue),
        overall_roi: ratios::roi(net_profit, total_costs),
    };

    debug!(
        total_phases = summary.total_phases,
        completed_phases = summary.completed_phases,
        total_units = summary.total_units,
        net_profit = %summary.net_profit,
        "project summarized"
    );

    summary
}
