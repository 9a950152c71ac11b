use crate::models::AppConfig;
use anyhow::{anyhow, Context, Result};

/// Installs the process-wide logger.
///
/// With `SITEGUARD_LOG_CONFIG` set, log4rs takes the `log` records and its
/// YAML file decides appenders and levels. Otherwise tracing-subscriber
/// prints both the `log` records and the HTTP trace spans to stdout.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    if let Some(path) = &config.log_config {
        log4rs::init_file(path, Default::default())
            .with_context(|| format!("Failed to load log config {}", path.display()))?;
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
