//! Tracing setup.
//!
//! Output goes to a file: anything written to stdout or stderr while the
//! terminal is in raw mode would corrupt the screen.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use tracing::{debug, dispatcher, subscriber::NoSubscriber};
use tracing_subscriber::EnvFilter;

/// Picks the filter directive: an explicit CLI flag, then `RUST_LOG`, then
/// the config file.
pub fn filter_directive(config: &TuiConfig, cli_override: bool, env: Option<String>) -> String {
    if cli_override {
        return config.log_filter().clone();
    }
    env.filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| config.log_filter().clone())
}

/// Installs the global subscriber, writing to the configured log file.
///
/// If a subscriber is already in effect (an earlier call, a test harness or
/// an embedding host), it is left in place and no log file is created or
/// truncated. The filter directive is validated either way.
pub fn init(config: &TuiConfig, directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid log filter '{}'", directive))?;

    if dispatcher::get_default(|current| !current.is::<NoSubscriber>()) {
        debug!(
            log_file = %config.log_file().display(),
            "Subscriber already installed, keeping it"
        );
        return Ok(());
    }

    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
    {
        debug!(error = %e, "Subscriber was installed concurrently, keeping it");
    }

    Ok(())
}
