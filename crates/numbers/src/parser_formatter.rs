//! Parser and formatter bundled for one language

use std::sync::Arc;

use voice_numbers_config::{ExtractionConfig, FormattingConfig, LocaleVocabulary, Settings};
use voice_numbers_core::{Duration, Language, Number};
use voice_numbers_formatter::NumberFormatter;
use voice_numbers_text_processing::{NumberParser, TokenStream};

use crate::params::{
    ExtractDurationParams, ExtractNumbersParams, NiceDurationParams, NiceNumberParams,
    PronounceNumberParams,
};
use crate::Result;

/// Number parser and formatter for one language, with default options
/// taken from [`Settings`]
///
/// ```ignore
/// let npf = NumberParserFormatter::for_language_tag("en-US")?;
/// assert_eq!(npf.nice_number(5.75).get(), "five and three quarters");
/// assert_eq!(npf.extract_duration("in two hours").get(), Some(Duration::from_secs(7200)));
/// ```
#[derive(Debug, Clone)]
pub struct NumberParserFormatter {
    formatter: NumberFormatter,
    parser: NumberParser,
    extraction: ExtractionConfig,
    formatting: FormattingConfig,
}

impl NumberParserFormatter {
    /// Default options for `language`
    pub fn new(language: Language) -> Result<Self> {
        let vocabulary = LocaleVocabulary::for_language(language)?;
        Ok(Self::with_vocabulary(vocabulary))
    }

    /// Resolve a tag such as "en", "en-US" or "en_GB"
    pub fn for_language_tag(tag: &str) -> Result<Self> {
        Self::new(Language::from_tag(tag)?)
    }

    /// Default options over a caller-supplied vocabulary
    pub fn with_vocabulary(vocabulary: Arc<LocaleVocabulary>) -> Self {
        Self {
            formatter: NumberFormatter::with_vocabulary(Arc::clone(&vocabulary)),
            parser: NumberParser::with_vocabulary(vocabulary),
            extraction: ExtractionConfig::default(),
            formatting: FormattingConfig::default(),
        }
    }

    /// Language, calendar and default options from validated settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let parser = NumberParser::from_settings(settings)?;
        let formatter = NumberFormatter::new(settings.extraction.language()?)?;
        tracing::debug!(
            language = %settings.extraction.language,
            short_scale = settings.extraction.short_scale,
            "Created number parser/formatter"
        );
        Ok(Self {
            formatter,
            parser,
            extraction: settings.extraction.clone(),
            formatting: settings.formatting.clone(),
        })
    }

    pub fn formatter(&self) -> &NumberFormatter {
        &self.formatter
    }

    pub fn parser(&self) -> &NumberParser {
        &self.parser
    }

    /// "five and three quarters" for 5.75
    pub fn nice_number(&self, number: impl Into<Number>) -> NiceNumberParams<'_> {
        NiceNumberParams::new(&self.formatter, number.into(), &self.formatting)
    }

    /// "minus four million, six hundred and nineteen" for -4000619
    pub fn pronounce_number(&self, number: impl Into<Number>) -> PronounceNumberParams<'_> {
        PronounceNumberParams::new(&self.formatter, number.into(), &self.formatting)
    }

    /// "twelve days three hours twenty three minutes one second"
    pub fn nice_duration(&self, duration: Duration) -> NiceDurationParams<'_> {
        NiceDurationParams::new(&self.formatter, duration, &self.formatting)
    }

    pub fn extract_numbers<'a>(&'a self, utterance: &'a str) -> ExtractNumbersParams<'a> {
        ExtractNumbersParams::new(&self.parser, utterance, &self.extraction)
    }

    pub fn extract_duration<'a>(&'a self, utterance: &'a str) -> ExtractDurationParams<'a> {
        ExtractDurationParams::new(&self.parser, utterance, &self.extraction)
    }

    /// First duration in `ts` under the configured scale, advancing the
    /// cursor past it
    pub fn extract_duration_from_stream(&self, ts: &mut TokenStream) -> Option<Duration> {
        self.parser.extract_duration(ts, self.extraction.short_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tags() {
        assert!(NumberParserFormatter::for_language_tag("en-US").is_ok());
        assert!(NumberParserFormatter::for_language_tag("EN_gb").is_ok());
        assert!(matches!(
            NumberParserFormatter::for_language_tag("it"),
            Err(crate::Error::Core(voice_numbers_core::Error::UnsupportedLanguage(_)))
        ));
    }

    #[test]
    fn test_defaults_follow_settings() {
        let mut settings = Settings::default();
        settings.formatting.speech = false;
        settings.extraction.short_scale = false;
        let npf = NumberParserFormatter::from_settings(&settings).unwrap();

        assert_eq!(npf.nice_number(5.75).get(), "5 3/4");
        assert_eq!(
            npf.extract_duration("one billion nanoseconds").get(),
            Some(Duration::from_secs(1000))
        );
    }

    #[test]
    fn test_setters_override_defaults() {
        let npf = NumberParserFormatter::new(Language::English).unwrap();
        assert_eq!(npf.nice_number(5.75).speech(false).get(), "5 3/4");
        assert_eq!(npf.pronounce_number(23).ordinal(true).get(), "twenty third");
        assert_eq!(npf.pronounce_number(1.2346).places(3).get(), "one point two three five");
        assert_eq!(
            npf.extract_duration("one billion nanoseconds").short_scale(false).get(),
            Some(Duration::from_secs(1000))
        );
    }

    #[test]
    fn test_stream_extraction_advances() {
        let npf = NumberParserFormatter::new(Language::English).unwrap();
        let mut ts = TokenStream::from_text("two minutes later");
        assert_eq!(npf.extract_duration_from_stream(&mut ts), Some(Duration::from_secs(120)));
        assert_eq!(ts.position(), 2);
    }
}
