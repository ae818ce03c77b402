//! Flowdiff CLI
//!
//! Compares two versions of a flow document and prints what changed.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use flowdiff_core::ComparisonService;
use flowdiff_source::HttpGraphSource;
use tracing::info;

pub mod config;
pub mod input;
pub mod logging;
pub mod report;

use config::{CliConfig, OutputFormat};
use input::{load_pair, Input};

/// Compare two versions of a flow document
#[derive(Debug, Clone, Parser)]
#[command(name = "flowdiff", version, about)]
pub struct Args {
    /// Base version: a file path or an http(s) URL
    #[arg(long)]
    pub base: Option<String>,

    /// Compare version: a file path or an http(s) URL
    #[arg(long)]
    pub compare: Option<String>,

    /// Output format, overrides FLOWDIFF_OUTPUT_FORMAT
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also print the layout size of each tree
    #[arg(long)]
    pub layout: bool,

    /// Download timeout in seconds, overrides FLOWDIFF_HTTP_TIMEOUT_SECS
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_to(&self, mut config: CliConfig) -> CliConfig {
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if let Some(secs) = self.timeout_secs {
            config.http_timeout_secs = secs;
        }
        config
    }
}

/// Load both sides, compare them and render the report
pub async fn run(args: &Args, config: &CliConfig) -> anyhow::Result<String> {
    let base = args.base.as_deref().map(Input::parse).transpose()?;
    let compare = args.compare.as_deref().map(Input::parse).transpose()?;

    let http = HttpGraphSource::new(Duration::from_secs(config.http_timeout_secs))
        .context("Failed to create HTTP client")?;
    let (base_text, compare_text) = load_pair(base.as_ref(), compare.as_ref(), &http).await?;

    let service = ComparisonService::from_texts(base_text.as_deref(), compare_text.as_deref())
        .map_err(|e| {
            let code = e.error_code();
            anyhow::Error::new(e).context(format!("Comparison failed ({})", code))
        })?;

    info!(format = %config.output_format, layout = args.layout, "Rendering report");
    report::render(&service, config.output_format, args.layout)
}
