//! Terminal front end for the tic-tac-toe engine.
//!
//! Two players share one keyboard. The engine owns every rule; this crate
//! maps keys to engine commands and draws the session it reports.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
