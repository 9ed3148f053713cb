//! Logging utilities

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Initialize the JSON logger. Filter defaults to `info` and can be
/// overridden through `RUST_LOG`.
pub fn init() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logger: {e}"))
}
