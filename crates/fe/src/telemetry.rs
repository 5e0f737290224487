//! Tracing subscriber bootstrap.
//!
//! Libraries only emit through `tracing` macros; binaries call [`init`] once.

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;
use crate::error::{FeError, FeResult};

/// Directives used when neither `RUST_LOG` nor the config parse.
pub const FALLBACK_DIRECTIVES: &str = "info";

/// Picks the filter directives: `RUST_LOG` if set and valid, then the
/// configured level, then [`FALLBACK_DIRECTIVES`].
#[must_use]
pub fn resolve_directives(env: Option<&str>, configured: &str) -> String {
    env.into_iter()
        .chain(std::iter::once(configured))
        .map(str::trim)
        .find(|directives| !directives.is_empty() && EnvFilter::try_new(directives).is_ok())
        .unwrap_or(FALLBACK_DIRECTIVES)
        .to_string()
}

/// Installs the global fmt subscriber.
///
/// # Errors
///
/// Returns [`FeError::Telemetry`] if a global subscriber is already set.
pub fn init(config: &TelemetryConfig) -> FeResult<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = resolve_directives(env.as_deref(), &config.log_level);
    let filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| FeError::Telemetry(e.to_string()))?;

    info!(target: "telemetry", %directives, "telemetry initialized");
    Ok(())
}
