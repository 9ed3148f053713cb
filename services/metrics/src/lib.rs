pub mod evaluator;
pub mod ratios;
pub mod scenario;


pub use evaluator::{evaluate_unit, CostBreakdown, UnitEvaluation};
pub use scenario::{evaluate_price_scenarios, CalculatorInputs, PriceScenario};
