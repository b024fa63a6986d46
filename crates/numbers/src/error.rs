//! Error types for the facade

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] voice_numbers_core::Error),

    #[error(transparent)]
    Config(#[from] voice_numbers_config::ConfigError),

    #[error(transparent)]
    TextProcessing(#[from] voice_numbers_text_processing::TextProcessingError),

    #[error(transparent)]
    Formatter(#[from] voice_numbers_formatter::FormatterError),
}

pub type Result<T> = std::result::Result<T, Error>;
