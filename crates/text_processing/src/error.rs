//! Error types for text processing

use thiserror::Error;
use voice_numbers_config::ConfigError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextProcessingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid parser option {option}: {message}")]
    InvalidOption { option: String, message: String },
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
