use thiserror::Error;
use uuid::Uuid;

/// The only structural fault the engine surfaces. All domain arithmetic
/// degrades to zero instead of erroring, so incremental data entry always
/// produces a renderable number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unit configuration references unknown unit type {0}")]
    UnknownUnitType(Uuid),
}
