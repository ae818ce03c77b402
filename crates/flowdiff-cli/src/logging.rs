//! Logging setup
//!
//! Logs go to stderr so that stdout carries only the report.

use std::io;

use anyhow::Context;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::CliConfig;

/// Install the global subscriber and report ignored configuration values
pub fn init_logging(config: &CliConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let json_layer = config.log_json.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(io::stderr)
    });
    let pretty_layer = (!config.log_json).then(|| {
        fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .context("Failed to set global default subscriber")?;

    for message in &config.ignored {
        warn!("{}", message);
    }

    debug!(
        log_format = if config.log_json { "json" } else { "pretty" },
        "Logging initialized"
    );

    Ok(())
}
