//! Core types for spoken-number extraction and formatting
//!
//! This crate provides foundational types used across all other crates:
//! - `Number`: integer-or-decimal values produced by the number grammar
//! - `Duration`, `DurationUnit`, `DurationAccumulator`: signed fixed-point durations
//! - Numeric utilities (whole-number checks, modulus splitting, mixed fractions)
//! - Language definitions
//! - Error types

pub mod duration;
pub mod error;
pub mod language;
pub mod number;
pub mod utils;

pub use duration::{CalendarConvention, Duration, DurationAccumulator, DurationUnit};
pub use error::{Error, Result};
pub use language::Language;
pub use number::Number;
pub use utils::{
    decimal_places_no_final_zeros, is_whole, long_pow, round_to_long, split_by_modulus,
    MixedFraction, SplitByModulus, WHOLE_NUMBER_ACCURACY,
};
