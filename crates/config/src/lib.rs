//! Configuration for spoken-number extraction and formatting
//!
//! Supports loading configuration from:
//! - TOML files (`config/default.toml`, `config/<env>.toml`)
//! - Environment variables (`VOICE_NUMBERS__` prefix, `__` separator)
//!
//! # Vocabulary
//!
//! Number words, magnitudes, fractions and duration-unit names are data, not
//! code. Each supported language ships a YAML table under `locales/` which is
//! embedded at compile time; callers may also load their own table with
//! [`LocaleVocabulary::load`].

pub mod settings;
pub mod vocabulary;

pub use settings::{load_settings, ExtractionConfig, FormattingConfig, Settings};
pub use vocabulary::{
    Denominator, DurationWord, LocaleVocabulary, MagnitudeEntry, UnitForm, WordClass, WordEntry,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Invalid vocabulary: {0}")]
    Vocabulary(String),

    #[error(transparent)]
    Core(#[from] voice_numbers_core::Error),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
