//! Error types shared by the number crates

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid calendar convention: {0}")]
    InvalidCalendar(String),
}

pub type Result<T> = std::result::Result<T, Error>;
