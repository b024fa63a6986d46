//! Text processing for spoken numbers and durations
//!
//! This crate provides the extraction engine:
//! - **Tokenizer**: splits text into word, number-literal and symbol tokens
//! - **Token stream**: a cursor with mark/reset backtracking
//! - **Number extraction**: cardinals, ordinals, fractions, decimals and
//!   approximators, under the short or long scale
//! - **Duration extraction**: number + unit groups merged into one duration
//!
//! # Example
//!
//! ```ignore
//! use voice_numbers_core::Language;
//! use voice_numbers_text_processing::NumberParser;
//!
//! let parser = NumberParser::new(Language::English)?;
//! let duration = parser.extract_duration_from_text("set a timer for three minutes", true);
//! ```

pub mod duration_extraction;
pub mod number_extraction;
pub mod parser;
pub mod token_stream;
pub mod tokenizer;

mod error;

pub use error::{Result, TextProcessingError};

pub use duration_extraction::{DurationExtractor, DEFAULT_MAX_NOISE_RUN};
pub use number_extraction::{ExtractedNumber, NumberExtractor, QuantityKind};
pub use parser::{NumberOrText, NumberParser};
pub use token_stream::{Mark, TokenStream};
pub use tokenizer::{tokenize, Token, TokenKind};
