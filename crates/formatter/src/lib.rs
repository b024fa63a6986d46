//! Spoken and written rendering of numbers and durations
//!
//! The inverse of the extraction engine: numbers become words ("minus four
//! million, six hundred and nineteen"), decimals become mixed fractions
//! ("five and three quarters") and durations become phrases the duration
//! extractor reads back unchanged.

pub mod duration;
pub mod number;

mod error;

pub use error::{FormatterError, Result};
pub use number::NumberFormatter;
