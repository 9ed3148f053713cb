pub mod error;
pub mod logger;
pub mod numeric;
pub mod settings;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::EngineError;
pub use settings::EngineSettings;
