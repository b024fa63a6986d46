//! Spoken number and duration extraction and formatting
//!
//! [`NumberParserFormatter`] bundles a [`NumberParser`] and a
//! [`NumberFormatter`] for one language. Every operation returns a parameter
//! object whose setters override the configured defaults:
//!
//! ```ignore
//! use voice_numbers::NumberParserFormatter;
//!
//! let npf = NumberParserFormatter::for_language_tag("en")?;
//! let spoken = npf.pronounce_number(-4_000_619).get();
//! let timer = npf.extract_duration("set a timer for three minutes and five seconds").get();
//! ```

pub mod params;
pub mod parser_formatter;

mod error;

pub use error::{Error, Result};
pub use params::{
    ExtractDurationParams, ExtractNumbersParams, NiceDurationParams, NiceNumberParams,
    PronounceNumberParams,
};
pub use parser_formatter::NumberParserFormatter;

pub use voice_numbers_config::{load_settings, Settings};
pub use voice_numbers_core::{CalendarConvention, Duration, DurationUnit, Language, Number};
pub use voice_numbers_formatter::NumberFormatter;
pub use voice_numbers_text_processing::{NumberOrText, NumberParser, QuantityKind, TokenStream};
