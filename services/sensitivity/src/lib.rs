pub mod ladder;


pub use ladder::{generate_ladder, SensitivityStep, StepKind};
