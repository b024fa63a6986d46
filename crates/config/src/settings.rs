//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use voice_numbers_core::{CalendarConvention, Language};

use crate::ConfigError;

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Number and duration extraction
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Number and duration formatting
    #[serde(default)]
    pub formatting: FormattingConfig,

    /// Month and year lengths shared by extraction and formatting
    #[serde(default)]
    pub calendar: CalendarConvention,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Language tag, e.g. "en" or "en-US"
    #[serde(default = "default_language")]
    pub language: String,

    /// Read "billion" as 10^9 (short scale) instead of 10^12
    #[serde(default = "default_true")]
    pub short_scale: bool,

    /// Read "second", "fourth", ... as ordinals rather than fractions
    #[serde(default)]
    pub prefer_ordinal: bool,

    /// Most noise tokens skipped between a number and its duration unit
    #[serde(default = "default_max_noise_run")]
    pub max_noise_run: usize,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_noise_run() -> usize {
    3
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            short_scale: true,
            prefer_ordinal: false,
            max_noise_run: default_max_noise_run(),
        }
    }
}

impl ExtractionConfig {
    pub fn language(&self) -> Result<Language, ConfigError> {
        Ok(Language::from_tag(&self.language)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingConfig {
    /// Spell out words ("five and a half") instead of figures ("5 1/2")
    #[serde(default = "default_true")]
    pub speech: bool,

    #[serde(default = "default_true")]
    pub short_scale: bool,

    /// Decimal places kept when pronouncing numbers
    #[serde(default = "default_places")]
    pub places: u32,

    /// Largest denominator tried for mixed fractions
    #[serde(default = "default_max_denominator")]
    pub max_denominator: i64,
}

fn default_places() -> u32 {
    2
}

fn default_max_denominator() -> i64 {
    20
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            speech: true,
            short_scale: true,
            places: default_places(),
            max_denominator: default_max_denominator(),
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a TOML document and validate them
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a single TOML file, without environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|_| ConfigError::FileNotFound(path.as_ref().display().to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_extraction()?;
        self.validate_formatting()?;
        self.calendar.validate()?;
        Ok(())
    }

    fn validate_extraction(&self) -> Result<(), ConfigError> {
        let extraction = &self.extraction;

        if Language::from_tag(&extraction.language).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "extraction.language".to_string(),
                message: format!("Unsupported language tag '{}'", extraction.language),
            });
        }

        if !(1..=8).contains(&extraction.max_noise_run) {
            return Err(ConfigError::InvalidValue {
                field: "extraction.max_noise_run".to_string(),
                message: format!("Must be between 1 and 8, got {}", extraction.max_noise_run),
            });
        }

        Ok(())
    }

    fn validate_formatting(&self) -> Result<(), ConfigError> {
        let formatting = &self.formatting;

        if formatting.places > 15 {
            return Err(ConfigError::InvalidValue {
                field: "formatting.places".to_string(),
                message: format!("At most 15 decimal places, got {}", formatting.places),
            });
        }

        if !(1..=100).contains(&formatting.max_denominator) {
            return Err(ConfigError::InvalidValue {
                field: "formatting.max_denominator".to_string(),
                message: format!(
                    "Must be between 1 and 100, got {}",
                    formatting.max_denominator
                ),
            });
        }

        Ok(())
    }
}

/// Load settings from `config/default`, `config/<env>` and `VOICE_NUMBERS__*`
/// environment variables, in increasing priority.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("VOICE_NUMBERS")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;
    tracing::info!(
        language = %settings.extraction.language,
        short_scale = settings.extraction.short_scale,
        seconds_per_year = settings.calendar.seconds_per_year,
        "Loaded number settings"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.extraction.language, "en");
        assert!(settings.extraction.short_scale);
        assert_eq!(settings.extraction.max_noise_run, 3);
        assert_eq!(settings.calendar.seconds_per_year, 31_536_000);
        assert!(settings.validate().is_ok());
    }

    #[rstest]
    #[case(1, true)]
    #[case(8, true)]
    #[case(0, false)]
    #[case(9, false)]
    fn test_max_noise_run_range(#[case] max_noise_run: usize, #[case] valid: bool) {
        let mut settings = Settings::default();
        settings.extraction.max_noise_run = max_noise_run;
        assert_eq!(settings.validate().is_ok(), valid, "{max_noise_run}");
    }

    #[rstest]
    #[case("en", true)]
    #[case("en-US", true)]
    #[case("EN_gb", true)]
    #[case("fr", false)]
    #[case("", false)]
    fn test_language_tags(#[case] language: &str, #[case] valid: bool) {
        let mut settings = Settings::default();
        settings.extraction.language = language.to_string();
        match settings.validate() {
            Ok(()) => assert!(valid, "{language:?}"),
            Err(ConfigError::InvalidValue { field, .. }) => {
                assert!(!valid, "{language:?}");
                assert_eq!(field, "extraction.language");
            }
            Err(other) => panic!("unexpected error {other:?}"),
        }
    }

    #[rstest]
    #[case(15, 20, None)]
    #[case(0, 1, None)]
    #[case(2, 100, None)]
    #[case(16, 20, Some("formatting.places"))]
    #[case(2, 0, Some("formatting.max_denominator"))]
    #[case(2, 101, Some("formatting.max_denominator"))]
    fn test_formatting_ranges(
        #[case] places: u32,
        #[case] max_denominator: i64,
        #[case] invalid_field: Option<&str>,
    ) {
        let mut settings = Settings::default();
        settings.formatting.places = places;
        settings.formatting.max_denominator = max_denominator;
        match (settings.validate(), invalid_field) {
            (Ok(()), None) => {}
            (Err(ConfigError::InvalidValue { field, .. }), Some(expected)) => assert_eq!(field, expected),
            (result, expected) => panic!("got {result:?}, expected invalid {expected:?}"),
        }
    }

    #[test]
    fn test_calendar_validation() {
        let mut settings = Settings::default();
        settings.calendar.seconds_per_year = 31_536_001;
        assert!(matches!(settings.validate(), Err(ConfigError::Core(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [extraction]
            short_scale = false

            [calendar]
            seconds_per_year = 31556952
            "#,
        )
        .unwrap();
        assert!(!settings.extraction.short_scale);
        assert_eq!(settings.extraction.max_noise_run, 3);
        assert_eq!(settings.formatting, FormattingConfig::default());
        assert_eq!(settings.calendar.seconds_per_year, 31_556_952);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Settings::from_toml_str("[extraction\nshort_scale = 1"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
