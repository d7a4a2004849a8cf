//! Billboard compliance CLI binary
//!
//! Logs go to stderr so stdout carries only the rendered result.

use anyhow::{Context, Result};
use clap::Parser;
use compliance_cli::{commands, Cli, CliConfig};
use compliance_engine::ComplianceEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    CliConfig::load_dotenv();
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log level '{}'", config.log_level))?,
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("billboard-compliance v{}", env!("CARGO_PKG_VERSION"));

    let engine = ComplianceEngine::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    commands::run(&cli.command, &config, &engine, std::io::stdin().lock(), &mut out)
        .context("command failed")?;

    Ok(())
}
