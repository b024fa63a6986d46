//! Facade configured from a settings file

use std::fs;

use rstest::rstest;
use tempfile::tempdir;
use voice_numbers::{Duration, Error, NumberOrText, NumberParserFormatter, QuantityKind, Settings};

fn from_toml(content: &str) -> voice_numbers::Result<NumberParserFormatter> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("numbers.toml");
    fs::write(&path, content).unwrap();
    let settings = Settings::load(&path)?;
    NumberParserFormatter::from_settings(&settings)
}

#[test]
fn test_calendar_from_file() {
    let npf = from_toml("[calendar]\nseconds_per_year = 31104000\n").unwrap();
    assert_eq!(
        npf.extract_duration("a month").get(),
        Some(Duration::from_secs(30 * 86_400))
    );
}

#[test]
fn test_extraction_defaults_from_file() {
    let npf = from_toml("[extraction]\nprefer_ordinal = true\n").unwrap();
    let pieces = npf.extract_numbers("the third time").get();
    assert_eq!(
        pieces[1],
        NumberOrText::Number {
            value: 3.into(),
            kind: QuantityKind::Ordinal
        }
    );
}

#[rstest]
#[case("[extraction]\nlanguage = \"fr\"\n")]
#[case("[calendar]\nseconds_per_year = 100\n")]
#[case("[formatting]\nplaces = 40\n")]
fn test_invalid_files_are_rejected(#[case] content: &str) {
    assert!(matches!(from_toml(content), Err(Error::Config(_))));
}
