//! Error types for formatting

use thiserror::Error;
use voice_numbers_config::ConfigError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, FormatterError>;
