//! Value records exchanged with the engine.
//!
//! Everything here is a plain immutable record passed by value. Identity
//! (unit type ids, phase ids) is caller-supplied; the engine never
//! allocates ids or keeps state between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub type UnitTypeId = Uuid;
pub type PhaseId = Uuid;

/// How a raw cost figure is interpreted before aggregation.
///
/// The wire tags match the values persisted by existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostInputMethod {
    #[serde(rename = "perUnit")]
    PerUnit,
    #[serde(rename = "perSqFt")]
    PerSqFt,
    #[serde(rename = "percentage")]
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Planned,
    InProgress,
    Future,
    Completed,
}

/// The slice of a unit type the engine cares about. Name, bedroom count
/// and other display metadata live with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTypeSpec {
    pub square_footage: u32,
}

impl UnitTypeSpec {
    pub fn new(square_footage: u32) -> Self {
        Self { square_footage }
    }
}

/// One cost category attached to a unit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostLineItem {
    pub value: Decimal,
    pub method: CostInputMethod,
}

impl CostLineItem {
    pub fn new(value: Decimal, method: CostInputMethod) -> Self {
        Self { value, method }
    }

    pub fn per_unit(value: Decimal) -> Self {
        Self::new(value, CostInputMethod::PerUnit)
    }

    pub fn per_sq_ft(value: Decimal) -> Self {
        Self::new(value, CostInputMethod::PerSqFt)
    }

    pub fn percentage(value: Decimal) -> Self {
        Self::new(value, CostInputMethod::Percentage)
    }

    pub fn zero() -> Self {
        Self::per_unit(Decimal::ZERO)
    }
}

/// A unit configuration's full cost and revenue profile within a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCostConfig {
    pub unit_type_id: UnitTypeId,
    pub quantity: u32,
    pub hard_costs: CostLineItem,
    pub soft_costs: CostLineItem,
    pub land_costs: CostLineItem,
    pub contingency_costs: CostLineItem,
    pub sales_costs: CostLineItem,
    pub lawyer_fees: CostLineItem,
    pub construction_financing: CostLineItem,
    pub use_construction_financing: bool,
    /// Base sale price applied to every unit without an individual price.
    pub sales_price: Decimal,
    /// Optional per-physical-unit prices. May be shorter than `quantity`;
    /// missing or non-positive entries fall back to `sales_price`.
    #[serde(default)]
    pub individual_prices: Vec<Decimal>,
}

impl UnitCostConfig {
    /// Resolve the sale price of the `index`-th physical unit.
    pub fn price_for(&self, index: usize) -> Decimal {
        match self.individual_prices.get(index) {
            Some(price) if *price > Decimal::ZERO => *price,
            _ => self.sales_price,
        }
    }

    /// Resolved price of every physical unit in this configuration.
    pub fn resolved_prices(&self) -> Vec<Decimal> {
        (0..self.quantity as usize).map(|i| self.price_for(i)).collect()
    }
}

/// Canonical output of evaluating one price scenario for one unit
/// configuration. Margin and ROI are numeric percentages (12.5 = 12.5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub label: String,
    pub sales_price: Decimal,
    pub sales_costs: Decimal,
    pub total_costs: Decimal,
    pub net_profit: Decimal,
    pub margin: Decimal,
    pub roi: Decimal,
    pub profit_per_sq_ft: Decimal,
}

/// A phase and its unit configurations, as assembled by the caller from
/// whatever storage it uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseInput {
    pub phase_id: PhaseId,
    pub status: PhaseStatus,
    pub units: Vec<UnitCostConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub phase_id: PhaseId,
    pub status: PhaseStatus,
    pub total_units: u32,
    pub total_costs: Decimal,
    pub total_revenue: Decimal,
    pub net_profit: Decimal,
    pub margin: Decimal,
    pub roi: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub total_phases: u32,
    pub completed_phases: u32,
    pub total_units: u32,
    pub total_costs: Decimal,
    pub total_revenue: Decimal,
    pub net_profit: Decimal,
    pub overall_margin: Decimal,
    pub overall_roi: Decimal,
}

/// Caller-supplied lookup of unit types referenced by unit configurations.
#[derive(Debug, Clone, Default)]
pub struct UnitTypeCatalog {
    types: HashMap<UnitTypeId, UnitTypeSpec>,
}

impl UnitTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: UnitTypeId, spec: UnitTypeSpec) {
        self.types.insert(id, spec);
    }

    pub fn get(&self, id: UnitTypeId) -> Option<&UnitTypeSpec> {
        self.types.get(&id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
