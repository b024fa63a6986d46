//! Fluent parameter objects returned by [`NumberParserFormatter`]
//!
//! Each object starts from the facade's configured defaults; setters override
//! single options and `get()` runs the call.
//!
//! [`NumberParserFormatter`]: crate::NumberParserFormatter

use voice_numbers_config::{ExtractionConfig, FormattingConfig};
use voice_numbers_core::{Duration, Number};
use voice_numbers_formatter::NumberFormatter;
use voice_numbers_text_processing::{NumberOrText, NumberParser};

#[derive(Debug, Clone)]
#[must_use = "call get() to format the number"]
pub struct NiceNumberParams<'a> {
    formatter: &'a NumberFormatter,
    number: Number,
    speech: bool,
    max_denominator: i64,
}

impl<'a> NiceNumberParams<'a> {
    pub(crate) fn new(formatter: &'a NumberFormatter, number: Number, defaults: &FormattingConfig) -> Self {
        Self {
            formatter,
            number,
            speech: defaults.speech,
            max_denominator: defaults.max_denominator,
        }
    }

    /// Words ("five and a half") instead of figures ("5 1/2")
    pub fn speech(mut self, speech: bool) -> Self {
        self.speech = speech;
        self
    }

    pub fn max_denominator(mut self, max_denominator: i64) -> Self {
        self.max_denominator = max_denominator;
        self
    }

    pub fn get(&self) -> String {
        self.formatter
            .nice_number(self.number, self.speech, self.max_denominator)
    }
}

#[derive(Debug, Clone)]
#[must_use = "call get() to pronounce the number"]
pub struct PronounceNumberParams<'a> {
    formatter: &'a NumberFormatter,
    number: Number,
    places: u32,
    short_scale: bool,
    ordinal: bool,
}

impl<'a> PronounceNumberParams<'a> {
    pub(crate) fn new(formatter: &'a NumberFormatter, number: Number, defaults: &FormattingConfig) -> Self {
        Self {
            formatter,
            number,
            places: defaults.places,
            short_scale: defaults.short_scale,
            ordinal: false,
        }
    }

    pub fn places(mut self, places: u32) -> Self {
        self.places = places;
        self
    }

    pub fn short_scale(mut self, short_scale: bool) -> Self {
        self.short_scale = short_scale;
        self
    }

    pub fn ordinal(mut self, ordinal: bool) -> Self {
        self.ordinal = ordinal;
        self
    }

    pub fn get(&self) -> String {
        self.formatter
            .pronounce_number(self.number, self.places, self.short_scale, self.ordinal)
    }
}

#[derive(Debug, Clone)]
#[must_use = "call get() to format the duration"]
pub struct NiceDurationParams<'a> {
    formatter: &'a NumberFormatter,
    duration: Duration,
    speech: bool,
}

impl<'a> NiceDurationParams<'a> {
    pub(crate) fn new(formatter: &'a NumberFormatter, duration: Duration, defaults: &FormattingConfig) -> Self {
        Self {
            formatter,
            duration,
            speech: defaults.speech,
        }
    }

    pub fn speech(mut self, speech: bool) -> Self {
        self.speech = speech;
        self
    }

    pub fn get(&self) -> String {
        self.formatter.nice_duration(self.duration, self.speech)
    }
}

#[derive(Debug, Clone)]
#[must_use = "call get() to extract the numbers"]
pub struct ExtractNumbersParams<'a> {
    parser: &'a NumberParser,
    utterance: &'a str,
    short_scale: bool,
    prefer_ordinal: bool,
}

impl<'a> ExtractNumbersParams<'a> {
    pub(crate) fn new(parser: &'a NumberParser, utterance: &'a str, defaults: &ExtractionConfig) -> Self {
        Self {
            parser,
            utterance,
            short_scale: defaults.short_scale,
            prefer_ordinal: defaults.prefer_ordinal,
        }
    }

    pub fn short_scale(mut self, short_scale: bool) -> Self {
        self.short_scale = short_scale;
        self
    }

    /// Read "second", "fourth" and "21st" as ordinals
    pub fn prefer_ordinal(mut self, prefer_ordinal: bool) -> Self {
        self.prefer_ordinal = prefer_ordinal;
        self
    }

    pub fn get(&self) -> Vec<NumberOrText> {
        self.parser
            .extract_numbers(self.utterance, self.short_scale, self.prefer_ordinal)
    }
}

#[derive(Debug, Clone)]
#[must_use = "call get() to extract the duration"]
pub struct ExtractDurationParams<'a> {
    parser: &'a NumberParser,
    utterance: &'a str,
    short_scale: bool,
}

impl<'a> ExtractDurationParams<'a> {
    pub(crate) fn new(parser: &'a NumberParser, utterance: &'a str, defaults: &ExtractionConfig) -> Self {
        Self {
            parser,
            utterance,
            short_scale: defaults.short_scale,
        }
    }

    pub fn short_scale(mut self, short_scale: bool) -> Self {
        self.short_scale = short_scale;
        self
    }

    /// First duration in the utterance, `None` when there is none
    pub fn get(&self) -> Option<Duration> {
        self.parser
            .extract_duration_from_text(self.utterance, self.short_scale)
    }
}
