//! boxtable CLI - Main entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use boxtable_cli::{Cli, Config, log_filter, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // RUST_LOG takes precedence over --log-level and the config file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(&cli, &config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let table = run(&cli, &config)?;
    println!("{table}");
    Ok(())
}
