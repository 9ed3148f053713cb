//! Engine defaults, overridable from the environment.
//!
//! `PHASETRACK__COMMISSION__TIER1_RATE=4.5` style variables override the
//! built-in values. The breakpoint default is a deliberate fixture: saved
//! scenarios were computed against the fixed $100,000 tier boundary.

use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommissionDefaults {
    pub tier1_rate: f64,
    pub tier2_rate: f64,
    pub breakpoint: f64,
}

impl Default for CommissionDefaults {
    fn default() -> Self {
        Self {
            tier1_rate: 5.0,
            tier2_rate: 3.0,
            breakpoint: 100_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensitivityDefaults {
    pub step_value: f64,
    pub scenario_count: u32,
}

impl Default for SensitivityDefaults {
    fn default() -> Self {
        Self {
            step_value: 10.0,
            scenario_count: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub commission: CommissionDefaults,
    #[serde(default)]
    pub sensitivity: SensitivityDefaults,
}

impl EngineSettings {
    pub fn load() -> anyhow::Result<Self> {
        let defaults = EngineSettings::default();
        let cfg = Config::builder()
            .set_default("commission.tier1_rate", defaults.commission.tier1_rate)?
            .set_default("commission.tier2_rate", defaults.commission.tier2_rate)?
            .set_default("commission.breakpoint", defaults.commission.breakpoint)?
            .set_default("sensitivity.step_value", defaults.sensitivity.step_value)?
            .set_default(
                "sensitivity.scenario_count",
                i64::from(defaults.sensitivity.scenario_count),
            )?
            .add_source(Environment::with_prefix("PHASETRACK").separator("__"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}
