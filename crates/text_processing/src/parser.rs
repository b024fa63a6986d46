//! String-level entry points over the tokenizer and extractors

use std::sync::Arc;

use voice_numbers_config::{LocaleVocabulary, Settings};
use voice_numbers_core::{CalendarConvention, Duration, Language, Number};

use crate::duration_extraction::{DurationExtractor, DEFAULT_MAX_NOISE_RUN};
use crate::number_extraction::{ExtractedNumber, NumberExtractor, QuantityKind};
use crate::token_stream::TokenStream;
use crate::{Result, TextProcessingError};

/// A piece of an utterance: either a number phrase or the text between
/// number phrases, whitespace included
#[derive(Debug, Clone, PartialEq)]
pub enum NumberOrText {
    Number { value: Number, kind: QuantityKind },
    Text(String),
}

impl NumberOrText {
    pub fn number(&self) -> Option<Number> {
        match self {
            Self::Number { value, .. } => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Number { .. } => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Number and duration parser for one language
#[derive(Debug, Clone)]
pub struct NumberParser {
    vocabulary: Arc<LocaleVocabulary>,
    calendar: CalendarConvention,
    max_noise_run: usize,
}

impl NumberParser {
    /// Parser using the embedded vocabulary for `language`
    pub fn new(language: Language) -> Result<Self> {
        Ok(Self::with_vocabulary(LocaleVocabulary::for_language(language)?))
    }

    pub fn with_vocabulary(vocabulary: Arc<LocaleVocabulary>) -> Self {
        Self {
            vocabulary,
            calendar: CalendarConvention::default(),
            max_noise_run: DEFAULT_MAX_NOISE_RUN,
        }
    }

    /// Parser configured from the extraction and calendar settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let language = settings.extraction.language()?;
        Ok(Self::new(language)?
            .with_calendar(settings.calendar)
            .with_max_noise_run(settings.extraction.max_noise_run)?)
    }

    pub fn with_calendar(mut self, calendar: CalendarConvention) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn with_max_noise_run(mut self, max_noise_run: usize) -> Result<Self> {
        if max_noise_run == 0 {
            return Err(TextProcessingError::InvalidOption {
                option: "max_noise_run".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.max_noise_run = max_noise_run;
        Ok(self)
    }

    pub fn vocabulary(&self) -> &LocaleVocabulary {
        &self.vocabulary
    }

    pub fn calendar(&self) -> CalendarConvention {
        self.calendar
    }

    pub fn number_extractor(&self, short_scale: bool, ordinals: bool) -> NumberExtractor<'_> {
        NumberExtractor::new(&self.vocabulary, short_scale, ordinals)
    }

    pub fn duration_extractor(&self) -> DurationExtractor<'_> {
        DurationExtractor::new(&self.vocabulary, self.calendar).with_max_noise_run(self.max_noise_run)
    }

    /// Number phrase at the cursor of `ts`, advancing past it
    pub fn extract_number(
        &self,
        ts: &mut TokenStream,
        short_scale: bool,
        ordinals: bool,
    ) -> Option<ExtractedNumber> {
        self.number_extractor(short_scale, ordinals).extract_one(ts)
    }

    /// First duration in `ts`. Ordinal readings are disabled so that
    /// "second" stays a unit.
    pub fn extract_duration(&self, ts: &mut TokenStream, short_scale: bool) -> Option<Duration> {
        let numbers = self.number_extractor(short_scale, false);
        self.duration_extractor()
            .extract_duration(ts, |ts| numbers.extract_one_no_ordinal(ts))
    }

    /// First duration in `utterance`
    pub fn extract_duration_from_text(&self, utterance: &str, short_scale: bool) -> Option<Duration> {
        let mut ts = TokenStream::from_text(utterance);
        self.extract_duration(&mut ts, short_scale)
    }

    /// Split `utterance` into number phrases and the text around them
    pub fn extract_numbers(
        &self,
        utterance: &str,
        short_scale: bool,
        prefer_ordinal: bool,
    ) -> Vec<NumberOrText> {
        let numbers = self.number_extractor(short_scale, prefer_ordinal);
        let mut ts = TokenStream::from_text(utterance);
        let mut result = Vec::new();
        let mut text_start = 0;

        while !ts.finished() {
            let Some(number) = numbers.extract_one(&mut ts) else {
                ts.advance();
                continue;
            };

            let (Some(first), Some(last)) = (ts.get(number.span.start), ts.get(number.span.end - 1))
            else {
                continue;
            };
            let (number_start, number_end) = (first.start, last.end);

            if number_start > text_start {
                result.push(NumberOrText::Text(utterance[text_start..number_start].to_string()));
            }
            result.push(NumberOrText::Number {
                value: number.value,
                kind: number.kind,
            });
            text_start = number_end;
        }

        if text_start < utterance.len() {
            result.push(NumberOrText::Text(utterance[text_start..].to_string()));
        }

        tracing::trace!(pieces = result.len(), "Split utterance into numbers and text");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> NumberParser {
        NumberParser::new(Language::English).unwrap()
    }

    #[test]
    fn test_extract_numbers_keeps_text() {
        let pieces = parser().extract_numbers("I am twenty three years old", true, false);
        assert_eq!(
            pieces,
            vec![
                NumberOrText::Text("I am ".to_string()),
                NumberOrText::Number { value: Number::Integer(23), kind: QuantityKind::Cardinal },
                NumberOrText::Text(" years old".to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_numbers_ordinals() {
        let parser = parser();
        let pieces = parser.extract_numbers("the second time", true, true);
        assert_eq!(pieces[1].number(), Some(Number::Integer(2)));

        let pieces = parser.extract_numbers("the second time", true, false);
        assert_eq!(pieces, vec![NumberOrText::Text("the second time".to_string())]);
    }

    #[test]
    fn test_extract_numbers_adjacent_and_empty() {
        let parser = parser();
        assert!(parser.extract_numbers("", true, false).is_empty());

        let pieces = parser.extract_numbers("5, 6", true, false);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[1].text(), Some(", "));
    }

    #[test]
    fn test_max_noise_run_must_be_positive() {
        assert!(parser().with_max_noise_run(0).is_err());
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.calendar.seconds_per_year = 360 * 86_400;
        let parser = NumberParser::from_settings(&settings).unwrap();
        assert_eq!(
            parser.extract_duration_from_text("one year", true),
            Some(Duration::from_secs(360 * 86_400))
        );

        settings.extraction.language = "de".to_string();
        assert!(NumberParser::from_settings(&settings).is_err());
    }
}
