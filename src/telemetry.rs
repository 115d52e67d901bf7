//! Tracing subscriber setup for binaries and tests embedding the model

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{Error, Result};

/// Installs the global fmt subscriber
///
/// `settings.level` is an `EnvFilter` directive such as `info` or
/// `xapi_model=debug`. `settings.format` selects `json` output; anything else
/// is printed in the pretty human-readable layout.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let filter =
        EnvFilter::try_new(&settings.level).map_err(|e| Error::Telemetry(e.to_string()))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match settings.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    };
    installed.map_err(|e| Error::Telemetry(e.to_string()))?;

    tracing::debug!(level = %settings.level, format = %settings.format, "telemetry initialized");
    Ok(())
}
