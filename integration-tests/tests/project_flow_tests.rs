//! End-to-end project tracking flow: unit configurations rolled up into
//! phase summaries, then into a project summary.

use costing_service::commission::CommissionSchedule;
use rust_decimal_macros::dec;
use shared::types::{
    CostLineItem, PhaseInput, PhaseStatus, UnitCostConfig, UnitTypeCatalog, UnitTypeSpec,
};
use summary_service::{summarize_phase, summarize_project};
use uuid::Uuid;

fn townhome(unit_type_id: Uuid, quantity: u32) -> UnitCostConfig {
    UnitCostConfig {
        unit_type_id,
        quantity,
        hard_costs: CostLineItem::per_sq_ft(dec!(100)),
        soft_costs: CostLineItem::per_unit(dec!(50000)),
        land_costs: CostLineItem::per_unit(dec!(30000)),
        contingency_costs: CostLineItem::zero(),
        sales_costs: CostLineItem::zero(),
        lawyer_fees: CostLineItem::zero(),
        construction_financing: CostLineItem::zero(),
        use_construction_financing: false,
        sales_price: dec!(250000),
        individual_prices: vec![],
    }
}

#[test]
fn test_full_project_rollup() {
    let _ = shared::logger::init();

    let townhome_id = Uuid::new_v4();
    let mut catalog = UnitTypeCatalog::new();
    catalog.insert(townhome_id, UnitTypeSpec::new(1000));

    let schedule = CommissionSchedule::default();

    let phase_one = PhaseInput {
        phase_id: Uuid::new_v4(),
        status: PhaseStatus::Completed,
        units: vec![townhome(townhome_id, 2)],
    };
    let phase_two = PhaseInput {
        phase_id: Uuid::new_v4(),
        status: PhaseStatus::Future,
        units: vec![townhome(townhome_id, 4)],
    };

    let summaries = vec![
        summarize_phase(&phase_one, &catalog, &schedule).unwrap(),
        summarize_phase(&phase_two, &catalog, &schedule).unwrap(),
    ];

    // Per unit: 189,500 costs against a 250,000 sale.
    assert_eq!(summaries[0].total_costs, dec!(379000));
    assert_eq!(summaries[1].total_costs, dec!(758000));

    let project = summarize_project(&summaries);
    assert_eq!(project.total_phases, 2);
    assert_eq!(project.completed_phases, 1);
    assert_eq!(project.total_units, 6);
    assert_eq!(project.total_costs, dec!(1137000));
    assert_eq!(project.total_revenue, dec!(1500000));
    assert_eq!(project.net_profit, dec!(363000));
    assert_eq!(project.overall_margin, dec!(24.2));
    assert_eq!(project.overall_roi.round_dp(1), dec!(31.9));
}

#[test]
fn test_mixed_prices_roll_up_exactly() {
    let townhome_id = Uuid::new_v4();
    let mut catalog = UnitTypeCatalog::new();
    catalog.insert(townhome_id, UnitTypeSpec::new(1000));

    let mut config = townhome(townhome_id, 3);
    config.individual_prices = vec![dec!(240000), dec!(250000), dec!(260000)];

    let phase = PhaseInput {
        phase_id: Uuid::new_v4(),
        status: PhaseStatus::InProgress,
        units: vec![config],
    };

    let summary = summarize_phase(&phase, &catalog, &CommissionSchedule::default()).unwrap();

    // Revenue is the exact sum, not average price times quantity (they
    // coincide here only because the spread is symmetric).
    assert_eq!(summary.total_revenue, dec!(750000));
    assert_eq!(summary.total_units, 3);
}

#[test]
fn test_unknown_unit_type_surfaces_as_error() {
    let phase = PhaseInput {
        phase_id: Uuid::new_v4(),
        status: PhaseStatus::Planned,
        units: vec![townhome(Uuid::new_v4(), 1)],
    };

    let result = summarize_phase(
        &phase,
        &UnitTypeCatalog::new(),
        &CommissionSchedule::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_phase_input_round_trips_through_json() {
    let townhome_id = Uuid::new_v4();
    let phase = PhaseInput {
        phase_id: Uuid::new_v4(),
        status: PhaseStatus::InProgress,
        units: vec![townhome(townhome_id, 2)],
    };

    let json = serde_json::to_string(&phase).unwrap();
    assert!(json.contains("\"in_progress\""));
    assert!(json.contains("\"perSqFt\""));

    let parsed: PhaseInput = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, phase);
}
