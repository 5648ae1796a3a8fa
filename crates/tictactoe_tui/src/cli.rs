//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Tracing filter, e.g. "debug" or "tictactoe_core=trace" (overrides the config file and RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_overrides() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(cli.log_filter.is_none());
    }

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "game.toml",
            "--log-file",
            "out.log",
            "--log-filter",
            "debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
