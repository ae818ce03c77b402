use anyhow::{Context, Result};
use clap::Parser;
use flowdiff_cli::config::CliConfig;
use flowdiff_cli::logging::init_logging;
use flowdiff_cli::{run, Args};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment variables, then apply flags
    let config = args.apply_to(CliConfig::load());

    init_logging(&config).context("Failed to initialize logging")?;

    let report = run(&args, &config).await?;
    print!("{}", report);

    Ok(())
}
