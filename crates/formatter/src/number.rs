//! Number pronunciation and mixed-fraction rendering

use std::sync::Arc;

use voice_numbers_config::LocaleVocabulary;
use voice_numbers_core::{
    decimal_places_no_final_zeros, long_pow, round_to_long, split_by_modulus, Language,
    MixedFraction, Number,
};

use crate::Result;

/// Renders numbers and durations as words for one language
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    vocabulary: Arc<LocaleVocabulary>,
}

impl NumberFormatter {
    /// Formatter using the embedded vocabulary for `language`
    pub fn new(language: Language) -> Result<Self> {
        Ok(Self::with_vocabulary(LocaleVocabulary::for_language(language)?))
    }

    pub fn with_vocabulary(vocabulary: Arc<LocaleVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &LocaleVocabulary {
        &self.vocabulary
    }

    /// Spell out `number`.
    ///
    /// Decimals are rounded to at most `places` digits, read one by one after
    /// the decimal point, trailing zeros dropped. `ordinal` only applies to
    /// whole values: "twenty third", "one hundredth".
    ///
    /// ```ignore
    /// formatter.pronounce_number(-4_000_619, 2, true, false);
    /// // "minus four million, six hundred and nineteen"
    /// ```
    pub fn pronounce_number(
        &self,
        number: impl Into<Number>,
        places: u32,
        short_scale: bool,
        ordinal: bool,
    ) -> String {
        match number.into() {
            Number::Integer(value) => self.pronounce_integer(value, short_scale, ordinal),
            Number::Decimal(value) => self.pronounce_decimal(value, places, short_scale, ordinal),
        }
    }

    /// Render `number` as a mixed fraction when one with a denominator up to
    /// `max_denominator` is close enough: "five and three quarters" when
    /// spoken, "5 3/4" when written. Otherwise the plain figure.
    pub fn nice_number(&self, number: impl Into<Number>, speech: bool, max_denominator: i64) -> String {
        let value = number.into().as_f64();
        let Some(fraction) = MixedFraction::of(value, max_denominator) else {
            tracing::trace!(value, max_denominator, "No mixed fraction, using the figure");
            return value.to_string();
        };

        if speech {
            self.speak_fraction(&fraction)
        } else {
            write_fraction(&fraction)
        }
    }

    fn pronounce_decimal(&self, value: f64, places: u32, short_scale: bool, ordinal: bool) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let places = decimal_places_no_final_zeros(value, places);
        let scale = long_pow(10, places);
        let scaled = round_to_long(value.abs() * scale as f64);
        let (whole, fraction) = (scaled / scale, scaled % scale);
        let signed_whole = if value < 0.0 { -whole } else { whole };

        if fraction == 0 {
            return self.pronounce_integer(signed_whole, short_scale, ordinal);
        }

        let mut words = String::new();
        if value < 0.0 {
            words.push_str(self.vocabulary.negative_word().unwrap_or("-"));
            words.push(' ');
        }
        words.push_str(&self.cardinal_words(whole, short_scale));
        words.push(' ');
        words.push_str(self.vocabulary.decimal_point_word().unwrap_or("."));

        let digits = format!("{:0width$}", fraction, width = places as usize);
        for digit in digits.chars().filter_map(|c| c.to_digit(10)) {
            words.push(' ');
            words.push_str(self.vocabulary.cardinal_word(i64::from(digit)).unwrap_or_default());
        }
        words
    }

    fn pronounce_integer(&self, value: i64, short_scale: bool, ordinal: bool) -> String {
        let mut words = String::new();
        if value < 0 {
            words.push_str(self.vocabulary.negative_word().unwrap_or("-"));
            words.push(' ');
        }
        let cardinal = self.cardinal_words(value, short_scale);
        if ordinal {
            words.push_str(&self.ordinalize(&cardinal));
        } else {
            words.push_str(&cardinal);
        }
        words
    }

    /// Words for `|value|`, magnitude groups separated by ", "
    pub(crate) fn cardinal_words(&self, value: i64, short_scale: bool) -> String {
        if value == 0 {
            return self.vocabulary.cardinal_word(0).unwrap_or_default().to_string();
        }

        let magnitudes = self.vocabulary.magnitudes_descending(short_scale);
        let groups: Vec<i64> = split_by_modulus(value, 1000)
            .map(|group| group.abs())
            .collect();

        let mut parts = Vec::with_capacity(groups.len());
        for (index, &group) in groups.iter().enumerate().rev() {
            if group == 0 {
                continue;
            }
            let mut part = self.below_thousand(group);
            if index > 0 {
                let exponent = 3 * index as u32;
                match magnitude_name(exponent, &magnitudes) {
                    Some(name) => {
                        part.push(' ');
                        part.push_str(&name);
                    }
                    None => tracing::warn!(exponent, "No magnitude word for exponent"),
                }
            }
            parts.push(part);
        }
        parts.join(", ")
    }

    fn below_thousand(&self, value: i64) -> String {
        let (hundreds, rest) = (value / 100, value % 100);
        let mut words = String::new();
        if hundreds > 0 {
            words.push_str(self.vocabulary.cardinal_word(hundreds).unwrap_or_default());
            words.push(' ');
            words.push_str(self.vocabulary.hundred_word());
        }
        if rest > 0 {
            if hundreds > 0 {
                words.push(' ');
                words.push_str(self.vocabulary.conjunction());
                words.push(' ');
            }
            words.push_str(&self.below_hundred(rest));
        }
        words
    }

    fn below_hundred(&self, value: i64) -> String {
        if let Some(word) = self.vocabulary.cardinal_word(value) {
            return word.to_string();
        }
        let tens = self.vocabulary.cardinal_word(value - value % 10).unwrap_or_default();
        let units = self.vocabulary.cardinal_word(value % 10).unwrap_or_default();
        format!("{tens} {units}")
    }

    /// Replace the last word with its ordinal form
    fn ordinalize(&self, cardinal: &str) -> String {
        let (head, last) = match cardinal.rsplit_once(' ') {
            Some((head, last)) => (Some(head), last),
            None => (None, cardinal),
        };
        let ordinal = match self.vocabulary.ordinal_word(last) {
            Some(ordinal) => ordinal.to_string(),
            None => {
                tracing::debug!(word = last, "No ordinal form, keeping cardinal");
                last.to_string()
            }
        };
        match head {
            Some(head) => format!("{head} {ordinal}"),
            None => ordinal,
        }
    }

    /// "half", "quarters", "thirds", "twentieths"
    fn denominator_name(&self, denominator: i64, plural: bool) -> String {
        if let Some(name) = self.vocabulary.fraction_name(denominator, plural) {
            return name.to_string();
        }
        let mut name = self.ordinalize(&self.cardinal_words(denominator, true));
        if plural {
            name.push_str(self.vocabulary.plural_suffix());
        }
        name
    }

    fn speak_fraction(&self, fraction: &MixedFraction) -> String {
        let mut words = String::new();
        if fraction.negative {
            words.push_str(self.vocabulary.negative_word().unwrap_or("-"));
            words.push(' ');
        }

        if fraction.is_whole() {
            words.push_str(&self.cardinal_words(fraction.whole, true));
            return words;
        }
        if fraction.whole != 0 {
            words.push_str(&self.cardinal_words(fraction.whole, true));
            words.push(' ');
            words.push_str(self.vocabulary.conjunction());
            words.push(' ');
        }
        words.push_str(&self.cardinal_words(fraction.numerator, true));
        words.push(' ');
        words.push_str(&self.denominator_name(fraction.denominator, fraction.numerator != 1));
        words
    }
}

fn write_fraction(fraction: &MixedFraction) -> String {
    let sign = if fraction.negative { "-" } else { "" };
    match (fraction.whole, fraction.numerator) {
        (whole, 0) => format!("{sign}{whole}"),
        (0, numerator) => format!("{sign}{numerator}/{}", fraction.denominator),
        (whole, numerator) => format!("{sign}{whole} {numerator}/{}", fraction.denominator),
    }
}

/// Name for `10^exponent`: its own word, or a compound such as "thousand
/// million" when the scale has no word for it
fn magnitude_name(exponent: u32, magnitudes: &[(u32, &str)]) -> Option<String> {
    let &(largest, word) = magnitudes.iter().find(|(e, _)| *e <= exponent)?;
    if largest == exponent {
        return Some(word.to_string());
    }
    let rest = magnitude_name(exponent - largest, magnitudes)?;
    Some(format!("{rest} {word}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn formatter() -> NumberFormatter {
        NumberFormatter::new(Language::English).unwrap()
    }

    #[rstest]
    #[case(0, "zero")]
    #[case(7, "seven")]
    #[case(23, "twenty three")]
    #[case(100, "one hundred")]
    #[case(105, "one hundred and five")]
    #[case(1_005, "one thousand, five")]
    #[case(100_000, "one hundred thousand")]
    #[case(-4_000_619, "minus four million, six hundred and nineteen")]
    #[case(365_000_001_825, "three hundred and sixty five billion, one thousand, eight hundred and twenty five")]
    fn test_pronounce_integers(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(formatter().pronounce_number(value, 2, true, false), expected);
    }

    #[test]
    fn test_pronounce_extremes() {
        let words = formatter().pronounce_number(i64::MIN, 2, true, false);
        assert!(words.starts_with("minus nine quintillion, two hundred and twenty three quadrillion"));
    }

    #[test]
    fn test_long_scale_compounds() {
        let formatter = formatter();
        assert_eq!(formatter.pronounce_number(2_000_000_000_000i64, 2, false, false), "two billion");
        assert_eq!(
            formatter.pronounce_number(5_000_000_000i64, 2, false, false),
            "five thousand million"
        );
    }

    #[rstest]
    #[case(1.5, 2, "one point five")]
    #[case(0.25, 2, "zero point two five")]
    #[case(3.14159, 3, "three point one four two")]
    #[case(24.998, 2, "twenty five")]
    #[case(-2.05, 2, "minus two point zero five")]
    #[case(-0.001, 2, "zero")]
    fn test_pronounce_decimals(#[case] value: f64, #[case] places: u32, #[case] expected: &str) {
        assert_eq!(formatter().pronounce_number(value, places, true, false), expected);
    }

    #[rstest]
    #[case(1, "first")]
    #[case(2, "second")]
    #[case(23, "twenty third")]
    #[case(40, "fortieth")]
    #[case(100, "one hundredth")]
    #[case(1_000_000, "one millionth")]
    fn test_pronounce_ordinals(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(formatter().pronounce_number(value, 2, true, true), expected);
    }

    #[test]
    fn test_ordinal_ignored_for_fractions() {
        assert_eq!(formatter().pronounce_number(2.5, 2, true, true), "two point five");
    }

    #[rstest]
    #[case(5.75, true, "five and three quarters")]
    #[case(0.5, true, "one half")]
    #[case(2.5, true, "two and one half")]
    #[case(1.0 / 3.0, true, "one third")]
    #[case(0.4, true, "two fifths")]
    #[case(-1.25, true, "minus one and one quarter")]
    #[case(7.0, true, "seven")]
    #[case(5.75, false, "5 3/4")]
    #[case(0.5, false, "1/2")]
    #[case(-3.0, false, "-3")]
    fn test_nice_number(#[case] value: f64, #[case] speech: bool, #[case] expected: &str) {
        assert_eq!(formatter().nice_number(value, speech, 20), expected);
    }

    #[test]
    fn test_nice_number_without_fraction() {
        let formatter = formatter();
        assert_eq!(formatter.nice_number(0.123, true, 4), "0.123");
        assert_eq!(formatter.nice_number(std::f64::consts::PI, false, 20), "3.141592653589793");
    }

    #[test]
    fn test_magnitude_name() {
        let magnitudes = [(12, "billion"), (6, "million"), (3, "thousand")];
        assert_eq!(magnitude_name(9, &magnitudes).as_deref(), Some("thousand million"));
        assert_eq!(magnitude_name(6, &magnitudes).as_deref(), Some("million"));
        assert_eq!(magnitude_name(1, &magnitudes), None);
    }
}
