//! Configuration for the flowdiff command
//!
//! Defaults, overridden by `FLOWDIFF_*` environment variables, overridden in
//! turn by command-line flags.

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the comparison is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable changelog
    #[default]
    Text,
    /// The combined status graph as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Command configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit logs as JSON instead of pretty text
    #[serde(default)]
    pub log_json: bool,

    /// Timeout for each download
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Report format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Environment overrides that were present but unusable
    #[serde(skip)]
    pub ignored: Vec<String>,
}

fn default_log_filter() -> String {
    "warn,flowdiff=info".to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_json: false,
            http_timeout_secs: default_http_timeout_secs(),
            output_format: OutputFormat::default(),
            ignored: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration, reading overrides through `lookup`.
    ///
    /// Logging is not yet initialized when this runs, so invalid values are
    /// collected in `ignored` for the caller to report.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup("FLOWDIFF_LOG_FILTER") {
            config.log_filter = filter;
        }

        if let Some(json) = lookup("FLOWDIFF_LOG_JSON") {
            match json.to_lowercase().as_str() {
                "true" | "1" => config.log_json = true,
                "false" | "0" => config.log_json = false,
                _ => config
                    .ignored
                    .push(format!("Invalid FLOWDIFF_LOG_JSON value: {}", json)),
            }
        }

        if let Some(timeout) = lookup("FLOWDIFF_HTTP_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.http_timeout_secs = secs,
                _ => config
                    .ignored
                    .push(format!("Invalid FLOWDIFF_HTTP_TIMEOUT_SECS value: {}", timeout)),
            }
        }

        if let Some(format) = lookup("FLOWDIFF_OUTPUT_FORMAT") {
            match format.parse::<OutputFormat>() {
                Ok(format) => config.output_format = format,
                Err(_) => config
                    .ignored
                    .push(format!("Invalid FLOWDIFF_OUTPUT_FORMAT value: {}", format)),
            }
        }

        config
    }
}
