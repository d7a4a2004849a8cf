//! Billboard compliance command-line front end
//!
//! Reads billboard records as JSON, runs them through the compliance
//! engine and prints reports, rule metadata or the penalty schedule.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::{CliConfig, OutputFormat};
pub use error::CliError;
