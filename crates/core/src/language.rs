//! Language definitions
//!
//! Every language listed here ships a vocabulary table in the config crate.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Languages with number and duration vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 1] = [Language::English];

    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
        }
    }

    /// Resolve a BCP 47 / POSIX style tag ("en", "en-US", "en_gb").
    ///
    /// Only the primary subtag is significant.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == primary)
            .ok_or_else(|| Error::UnsupportedLanguage(tag.to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
