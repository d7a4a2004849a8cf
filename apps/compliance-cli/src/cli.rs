//! Command-line arguments

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "billboard-compliance")]
#[command(
    version,
    about = "Evaluate billboard records against the regulatory rule catalogue"
)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, env = "BILLBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Output format: json, pretty or table
    #[arg(
        short,
        long,
        global = true,
        env = "BILLBOARD_OUTPUT",
        default_value = "pretty"
    )]
    pub output: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a billboard record (JSON) and print the compliance report
    Evaluate {
        /// Record file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Reject malformed records before evaluating
        #[arg(long)]
        validate: bool,

        /// Notice issue date for deadlines (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date)]
        issued_on: Option<NaiveDate>,
    },
    /// List rule metadata, optionally for one category
    Rules {
        /// size, placement, permit, structural or content
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show a single rule by id
    Rule {
        /// Rule id, e.g. PERMIT_001
        id: String,
    },
    /// Print fine ranges and enforcement actions by severity
    Penalties,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}
