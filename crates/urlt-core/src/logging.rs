//! Logging init: tracing to stderr, filterable via `URLT_LOG`.

use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;

/// Default filter when `URLT_LOG` is unset. WARN keeps pattern-mismatch
/// warnings visible without narrating every invocation.
const DEFAULT_FILTER: &str = "warn";

/// Initialize structured logging to stderr.
///
/// Formatting output goes to stdout, so diagnostics must stay on stderr for
/// the tool to be pipeable. Returns Err if a subscriber is already set.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env("URLT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))?;

    Ok(())
}
