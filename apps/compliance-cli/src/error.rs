//! Error types for the compliance CLI

use compliance_engine::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid billboard record: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Failed to encode output: {0}")]
    Encode(serde_json::Error),

    #[error("Record failed validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Unknown category: {0} (expected size, placement, permit, structural or content)")]
    UnknownCategory(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidSetting { name: &'static str, value: String },
}
