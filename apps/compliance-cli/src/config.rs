//! Runtime configuration resolved from flags, environment and `.env`

use crate::cli::Cli;
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Pretty,
    Table,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, CliError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "table" | "text" => Ok(Self::Table),
            _ => Err(CliError::InvalidSetting {
                name: "output",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub log_level: String,
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load `.env` so clap's env fallbacks see it. Call before parsing.
    pub fn load_dotenv() {
        dotenvy::dotenv().ok();
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let log_level = cli.log_level.trim().to_string();
        if log_level.is_empty() {
            return Err(CliError::InvalidSetting {
                name: "log-level",
                value: cli.log_level.clone(),
            });
        }

        Ok(Self {
            log_level,
            output: OutputFormat::parse(&cli.output)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::parse("xml"),
            Err(CliError::InvalidSetting { name: "output", .. })
        ));
    }

    #[test]
    fn test_config_from_flags() {
        let cli = Cli::try_parse_from([
            "billboard-compliance",
            "--log-level",
            "debug",
            "--output",
            "table",
            "penalties",
        ])
        .unwrap();
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Table);
    }

    #[test]
    fn test_config_rejects_blank_log_level() {
        let cli = Cli::try_parse_from(["billboard-compliance", "--log-level", " ", "penalties"])
            .unwrap();
        assert!(CliConfig::from_cli(&cli).is_err());
    }
}
