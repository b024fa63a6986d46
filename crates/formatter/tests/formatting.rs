//! Formatter behaviour through the public API

use rstest::rstest;
use voice_numbers_config::LocaleVocabulary;
use voice_numbers_core::{Duration, Language, Number};
use voice_numbers_formatter::NumberFormatter;

fn formatter() -> NumberFormatter {
    NumberFormatter::new(Language::English).unwrap()
}

#[rstest]
#[case(Number::Integer(19), "nineteen")]
#[case(Number::Integer(1_000_000), "one million")]
#[case(Number::Integer(2_500_000_000), "two billion, five hundred million")]
#[case(Number::Decimal(0.5), "zero point five")]
#[case(Number::Decimal(12.0), "twelve")]
fn test_pronounce(#[case] number: Number, #[case] expected: &str) {
    assert_eq!(formatter().pronounce_number(number, 2, true, false), expected);
}

#[test]
fn test_places_bound_decimals() {
    let formatter = formatter();
    assert_eq!(formatter.pronounce_number(1.23456, 0, true, false), "one");
    assert_eq!(formatter.pronounce_number(1.23456, 4, true, false), "one point two three four six");
}

#[test]
fn test_denominator_limit() {
    let formatter = formatter();
    assert_eq!(formatter.nice_number(0.2, true, 4), "0.2");
    assert_eq!(formatter.nice_number(0.2, true, 5), "one fifth");
}

#[test]
fn test_custom_vocabulary_units() {
    let yaml = include_str!("../../config/locales/en.yaml").replace("plural: days", "plural: dayz");
    let vocabulary = LocaleVocabulary::from_yaml_str(&yaml).unwrap();
    let formatter = NumberFormatter::with_vocabulary(vocabulary.into());
    assert_eq!(formatter.nice_duration(Duration::from_secs(2 * 86_400), true), "two dayz");
}
