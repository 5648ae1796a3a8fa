//! Tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, TuiConfig, logging, terminal};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let cli_filter = cli.log_filter.is_some();
    let config = TuiConfig::load(cli.config.as_deref())?
        .with_overrides(cli.log_file, cli.log_filter);

    let env_filter = std::env::var("RUST_LOG").ok();
    let directive = logging::filter_directive(&config, cli_filter, env_filter);
    logging::init(&config, &directive)?;
    info!(log_filter = %directive, "Logging initialized");

    terminal::run(&config)
}
