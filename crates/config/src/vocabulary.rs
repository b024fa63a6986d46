//! Locale vocabulary tables
//!
//! Loads number words, magnitudes, fractions, connectors and duration-unit
//! names from YAML and indexes them for lookup by normalized (lowercase)
//! token text. The same table drives extraction and, through the reverse
//! lookups, formatting.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use voice_numbers_core::{DurationUnit, Language, Number};

use crate::ConfigError;

static ENGLISH_YAML: &str = include_str!("../locales/en.yaml");

static ENGLISH: Lazy<Result<Arc<LocaleVocabulary>, ConfigError>> =
    Lazy::new(|| LocaleVocabulary::from_yaml_str(ENGLISH_YAML).map(Arc::new));

/// Shape of a cardinal word below one thousand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// zero to nine
    Unit,
    /// ten to nineteen
    Teen,
    /// twenty, thirty, ... ninety
    Tens,
    Hundred,
}

/// A cardinal or ordinal word with its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    pub value: i64,
    pub class: WordClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagnitudeEntry {
    /// Exponent under the short scale (billion = 9)
    pub short: u32,
    /// Exponent under the long scale (billion = 12)
    pub long: u32,
}

impl MagnitudeEntry {
    pub fn exponent(&self, short_scale: bool) -> u32 {
        if short_scale {
            self.short
        } else {
            self.long
        }
    }
}

/// A word naming the denominator of a fraction ("third", "quarters")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Denominator {
    pub value: Number,
    pub plural: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitForm {
    Singular,
    Plural,
    /// Alternative or misspelled full word
    Variant,
    Abbreviation,
}

/// A word naming a duration unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationWord {
    pub unit: DurationUnit,
    pub form: UnitForm,
}

impl DurationWord {
    pub fn is_abbreviation(&self) -> bool {
        self.form == UnitForm::Abbreviation
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MagnitudeDef {
    word: String,
    short: u32,
    long: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct FractionDef {
    singular: String,
    plural: String,
    denominator: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct DurationDef {
    unit: DurationUnit,
    singular: String,
    plural: String,
    #[serde(default)]
    variants: Vec<String>,
    #[serde(default)]
    abbreviations: Vec<String>,
}

/// On-disk layout of a vocabulary file
#[derive(Debug, Clone, Deserialize)]
struct VocabularyFile {
    language: String,
    units: Vec<String>,
    teens: Vec<String>,
    tens: Vec<String>,
    hundred: String,
    #[serde(default)]
    magnitudes: Vec<MagnitudeDef>,
    #[serde(default)]
    ordinals: HashMap<String, String>,
    #[serde(default)]
    fractions: Vec<FractionDef>,
    #[serde(default = "default_min_ordinal_denominator")]
    min_ordinal_denominator: i64,
    #[serde(default)]
    ordinal_suffixes: Vec<String>,
    plural_suffix: String,
    #[serde(default)]
    approximators: HashMap<String, i64>,
    #[serde(default)]
    indefinite_articles: Vec<String>,
    #[serde(default)]
    articles: Vec<String>,
    #[serde(default)]
    connectors: Vec<String>,
    conjunction: String,
    #[serde(default)]
    group_separators: Vec<String>,
    #[serde(default)]
    of: Vec<String>,
    #[serde(default)]
    decimal_points: Vec<String>,
    #[serde(default)]
    negatives: Vec<String>,
    #[serde(default)]
    durations: Vec<DurationDef>,
}

fn default_min_ordinal_denominator() -> i64 {
    3
}

/// Indexed vocabulary for one language
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleVocabulary {
    language: Language,
    units: Vec<String>,
    teens: Vec<String>,
    tens: Vec<String>,
    hundred: String,
    cardinals: HashMap<String, WordEntry>,
    ordinals: HashMap<String, WordEntry>,
    magnitudes: HashMap<String, MagnitudeEntry>,
    ordinal_magnitudes: HashMap<String, MagnitudeEntry>,
    magnitude_words: Vec<(String, MagnitudeEntry)>,
    ordinal_of: HashMap<String, String>,
    fractions: HashMap<String, (i64, bool)>,
    fraction_names: HashMap<i64, (String, String)>,
    min_ordinal_denominator: i64,
    ordinal_suffixes: HashSet<String>,
    plural_suffix: String,
    approximators: HashMap<String, i64>,
    indefinite_articles: HashSet<String>,
    articles: HashSet<String>,
    connectors: HashSet<String>,
    conjunction: String,
    group_separators: HashSet<String>,
    of_words: HashSet<String>,
    decimal_points: Vec<String>,
    negatives: Vec<String>,
    durations: HashMap<String, DurationWord>,
    unit_names: HashMap<DurationUnit, (String, String)>,
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Vocabulary(message.into())
}

impl LocaleVocabulary {
    /// Embedded vocabulary for `language`, parsed once per process
    pub fn for_language(language: Language) -> Result<Arc<LocaleVocabulary>, ConfigError> {
        match language {
            Language::English => ENGLISH.clone(),
        }
    }

    /// Load a vocabulary from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|_| ConfigError::FileNotFound(path.as_ref().display().to_string()))?;
        Self::from_yaml_str(&content)
    }

    /// Parse and index a YAML vocabulary
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let file: VocabularyFile =
            serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))?;
        Self::build(file)
    }

    fn build(file: VocabularyFile) -> Result<Self, ConfigError> {
        let language = Language::from_tag(&file.language)?;

        if file.units.len() != 10 || file.teens.len() != 10 || file.tens.len() != 8 {
            return Err(invalid(format!(
                "expected 10 units, 10 teens and 8 tens, got {}, {} and {}",
                file.units.len(),
                file.teens.len(),
                file.tens.len()
            )));
        }

        let units: Vec<String> = file.units.iter().map(|w| w.to_lowercase()).collect();
        let teens: Vec<String> = file.teens.iter().map(|w| w.to_lowercase()).collect();
        let tens: Vec<String> = file.tens.iter().map(|w| w.to_lowercase()).collect();
        let hundred = file.hundred.to_lowercase();

        let mut cardinals = HashMap::new();
        for (i, word) in units.iter().enumerate() {
            cardinals.insert(word.clone(), WordEntry { value: i as i64, class: WordClass::Unit });
        }
        for (i, word) in teens.iter().enumerate() {
            cardinals.insert(word.clone(), WordEntry { value: 10 + i as i64, class: WordClass::Teen });
        }
        for (i, word) in tens.iter().enumerate() {
            cardinals.insert(
                word.clone(),
                WordEntry { value: 20 + 10 * i as i64, class: WordClass::Tens },
            );
        }
        cardinals.insert(hundred.clone(), WordEntry { value: 100, class: WordClass::Hundred });

        let mut magnitudes = HashMap::new();
        let mut magnitude_words = Vec::new();
        for def in &file.magnitudes {
            if def.short < 3 || def.long < 3 {
                return Err(invalid(format!("magnitude '{}' must be at least a thousand", def.word)));
            }
            let entry = MagnitudeEntry { short: def.short, long: def.long };
            magnitudes.insert(def.word.to_lowercase(), entry);
            magnitude_words.push((def.word.to_lowercase(), entry));
        }

        let mut ordinals = HashMap::new();
        let mut ordinal_magnitudes = HashMap::new();
        let mut ordinal_of = HashMap::new();
        for (ordinal, cardinal) in &file.ordinals {
            let ordinal = ordinal.to_lowercase();
            let cardinal = cardinal.to_lowercase();
            if let Some(entry) = cardinals.get(&cardinal) {
                ordinals.insert(ordinal.clone(), *entry);
            } else if let Some(entry) = magnitudes.get(&cardinal) {
                ordinal_magnitudes.insert(ordinal.clone(), *entry);
            } else {
                return Err(invalid(format!(
                    "ordinal '{}' refers to unknown cardinal '{}'",
                    ordinal, cardinal
                )));
            }
            ordinal_of.insert(cardinal, ordinal);
        }

        let mut fractions = HashMap::new();
        let mut fraction_names = HashMap::new();
        for def in &file.fractions {
            if def.denominator < 2 {
                return Err(invalid(format!("fraction '{}' needs a denominator above one", def.singular)));
            }
            fractions.insert(def.singular.to_lowercase(), (def.denominator, false));
            fractions.insert(def.plural.to_lowercase(), (def.denominator, true));
            fraction_names.insert(
                def.denominator,
                (def.singular.to_lowercase(), def.plural.to_lowercase()),
            );
        }

        let mut durations = HashMap::new();
        let mut unit_names = HashMap::new();
        for def in &file.durations {
            let mut insert = |word: &String, form: UnitForm| {
                durations.insert(word.to_lowercase(), DurationWord { unit: def.unit, form });
            };
            insert(&def.singular, UnitForm::Singular);
            insert(&def.plural, UnitForm::Plural);
            def.variants.iter().for_each(|w| insert(w, UnitForm::Variant));
            def.abbreviations.iter().for_each(|w| insert(w, UnitForm::Abbreviation));
            unit_names.insert(def.unit, (def.singular.to_lowercase(), def.plural.to_lowercase()));
        }

        let vocabulary = Self {
            language,
            units,
            teens,
            tens,
            hundred,
            cardinals,
            ordinals,
            magnitudes,
            ordinal_magnitudes,
            magnitude_words,
            ordinal_of,
            fractions,
            fraction_names,
            min_ordinal_denominator: file.min_ordinal_denominator,
            ordinal_suffixes: lowercase_set(&file.ordinal_suffixes),
            plural_suffix: file.plural_suffix.to_lowercase(),
            approximators: file
                .approximators
                .iter()
                .map(|(word, value)| (word.to_lowercase(), *value))
                .collect(),
            indefinite_articles: lowercase_set(&file.indefinite_articles),
            articles: lowercase_set(&file.articles),
            connectors: lowercase_set(&file.connectors),
            conjunction: file.conjunction.to_lowercase(),
            group_separators: lowercase_set(&file.group_separators),
            of_words: lowercase_set(&file.of),
            decimal_points: file.decimal_points.iter().map(|w| w.to_lowercase()).collect(),
            negatives: file.negatives.iter().map(|w| w.to_lowercase()).collect(),
            durations,
            unit_names,
        };

        tracing::debug!(
            language = %vocabulary.language,
            cardinals = vocabulary.cardinals.len(),
            magnitudes = vocabulary.magnitudes.len(),
            duration_words = vocabulary.durations.len(),
            "Indexed locale vocabulary"
        );

        Ok(vocabulary)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    // ---- extraction lookups ----

    /// Cardinal word below one thousand ("seven", "forty", "hundred")
    pub fn cardinal(&self, word: &str) -> Option<WordEntry> {
        self.cardinals.get(word).copied()
    }

    /// Ordinal word below one thousand ("seventh", "fortieth", "hundredth")
    pub fn ordinal(&self, word: &str) -> Option<WordEntry> {
        self.ordinals.get(word).copied()
    }

    pub fn is_hundred(&self, word: &str) -> bool {
        word == self.hundred
    }

    /// Exponent of a cardinal magnitude word ("million")
    pub fn magnitude(&self, word: &str, short_scale: bool) -> Option<u32> {
        self.magnitudes.get(word).map(|m| m.exponent(short_scale))
    }

    /// Exponent of an ordinal magnitude word ("millionth")
    pub fn ordinal_magnitude(&self, word: &str, short_scale: bool) -> Option<u32> {
        self.ordinal_magnitudes
            .get(word)
            .map(|m| m.exponent(short_scale))
    }

    /// Denominator named by `word`: "half", "quarters", "third", "tenths",
    /// "billionth". Ordinals below the minimum denominator ("first",
    /// "second") are not denominators.
    pub fn denominator(&self, word: &str, short_scale: bool) -> Option<Denominator> {
        if let Some((value, plural)) = self.fractions.get(word) {
            return Some(Denominator { value: Number::Integer(*value), plural: *plural });
        }
        if let Some(value) = self.ordinal_denominator(word, short_scale) {
            return Some(Denominator { value, plural: false });
        }
        let stem = word.strip_suffix(self.plural_suffix.as_str())?;
        self.ordinal_denominator(stem, short_scale)
            .map(|value| Denominator { value, plural: true })
    }

    fn ordinal_denominator(&self, word: &str, short_scale: bool) -> Option<Number> {
        if let Some(entry) = self.ordinals.get(word) {
            return (entry.value >= self.min_ordinal_denominator)
                .then_some(Number::Integer(entry.value));
        }
        self.ordinal_magnitude(word, short_scale).map(Number::pow10)
    }

    /// Fraction with a dedicated name ("half", "quarters")
    pub fn is_named_fraction(&self, word: &str) -> bool {
        self.fractions.contains_key(word)
    }

    pub fn approximator(&self, word: &str) -> Option<i64> {
        self.approximators.get(word).copied()
    }

    pub fn is_ordinal_suffix(&self, word: &str) -> bool {
        self.ordinal_suffixes.contains(word)
    }

    pub fn is_plural_suffix(&self, word: &str) -> bool {
        word == self.plural_suffix
    }

    pub fn is_indefinite_article(&self, word: &str) -> bool {
        self.indefinite_articles.contains(word)
    }

    pub fn is_article(&self, word: &str) -> bool {
        self.articles.contains(word)
    }

    /// Words and symbols joining duration groups ("and", ",")
    pub fn is_connector(&self, word: &str) -> bool {
        self.connectors.contains(word)
    }

    /// Words and symbols allowed after a magnitude ("million, two hundred")
    pub fn is_group_separator(&self, word: &str) -> bool {
        self.group_separators.contains(word)
    }

    /// Conjunction allowed after "hundred" ("hundred and five")
    pub fn is_conjunction(&self, word: &str) -> bool {
        word == self.conjunction
    }

    pub fn is_of(&self, word: &str) -> bool {
        self.of_words.contains(word)
    }

    pub fn is_decimal_point(&self, word: &str) -> bool {
        self.decimal_points.iter().any(|w| w == word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negatives.iter().any(|w| w == word)
    }

    pub fn duration_word(&self, word: &str) -> Option<DurationWord> {
        self.durations.get(word).copied()
    }

    // ---- formatting lookups ----

    /// Single word for 0..=99 when one exists ("seven", "twelve", "forty")
    pub fn cardinal_word(&self, value: i64) -> Option<&str> {
        match value {
            0..=9 => Some(self.units[value as usize].as_str()),
            10..=19 => Some(self.teens[(value - 10) as usize].as_str()),
            20..=99 if value % 10 == 0 => Some(self.tens[(value / 10 - 2) as usize].as_str()),
            _ => None,
        }
    }

    pub fn hundred_word(&self) -> &str {
        &self.hundred
    }

    /// Magnitude words with their exponent for `short_scale`, largest first
    pub fn magnitudes_descending(&self, short_scale: bool) -> Vec<(u32, &str)> {
        let mut words: Vec<(u32, &str)> = self
            .magnitude_words
            .iter()
            .map(|(word, entry)| (entry.exponent(short_scale), word.as_str()))
            .collect();
        words.sort_by(|a, b| b.0.cmp(&a.0));
        words.dedup_by_key(|(exponent, _)| *exponent);
        words
    }

    /// Ordinal form of a single cardinal word ("three" → "third")
    pub fn ordinal_word(&self, cardinal: &str) -> Option<&str> {
        self.ordinal_of.get(cardinal).map(String::as_str)
    }

    /// Dedicated fraction name for a denominator ("half"/"halves")
    pub fn fraction_name(&self, denominator: i64, plural: bool) -> Option<&str> {
        self.fraction_names
            .get(&denominator)
            .map(|(singular, plural_form)| if plural { plural_form.as_str() } else { singular.as_str() })
    }

    /// Singular and plural name of a duration unit
    pub fn unit_name(&self, unit: DurationUnit, plural: bool) -> Option<&str> {
        self.unit_names
            .get(&unit)
            .map(|(singular, plural_form)| if plural { plural_form.as_str() } else { singular.as_str() })
    }

    pub fn plural_suffix(&self) -> &str {
        &self.plural_suffix
    }

    pub fn conjunction(&self) -> &str {
        &self.conjunction
    }

    pub fn negative_word(&self) -> Option<&str> {
        self.negatives.first().map(String::as_str)
    }

    pub fn decimal_point_word(&self) -> Option<&str> {
        self.decimal_points.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Arc<LocaleVocabulary> {
        LocaleVocabulary::for_language(Language::English).unwrap()
    }

    #[test]
    fn test_embedded_english_loads() {
        let vocab = english();
        assert_eq!(vocab.language(), Language::English);
        assert_eq!(vocab.cardinal("seven"), Some(WordEntry { value: 7, class: WordClass::Unit }));
        assert_eq!(vocab.cardinal("fifteen"), Some(WordEntry { value: 15, class: WordClass::Teen }));
        assert_eq!(vocab.cardinal("ninety"), Some(WordEntry { value: 90, class: WordClass::Tens }));
        assert!(vocab.is_hundred("hundred"));
    }

    #[test]
    fn test_magnitude_scales() {
        let vocab = english();
        assert_eq!(vocab.magnitude("billion", true), Some(9));
        assert_eq!(vocab.magnitude("billion", false), Some(12));
        assert_eq!(vocab.ordinal_magnitude("billionth", false), Some(12));
        assert_eq!(vocab.magnitude("hundred", true), None);
    }

    #[test]
    fn test_ordinals() {
        let vocab = english();
        assert_eq!(vocab.ordinal("third").map(|e| e.value), Some(3));
        assert_eq!(vocab.ordinal("twentieth").map(|e| e.value), Some(20));
        assert_eq!(vocab.ordinal("hundredth").map(|e| e.class), Some(WordClass::Hundred));
        assert_eq!(vocab.ordinal_word("two"), Some("second"));
        assert_eq!(vocab.ordinal_word("thousand"), Some("thousandth"));
    }

    #[test]
    fn test_denominators() {
        let vocab = english();
        assert_eq!(
            vocab.denominator("halves", true),
            Some(Denominator { value: Number::Integer(2), plural: true })
        );
        assert_eq!(
            vocab.denominator("tenth", true),
            Some(Denominator { value: Number::Integer(10), plural: false })
        );
        assert_eq!(
            vocab.denominator("tenths", true),
            Some(Denominator { value: Number::Integer(10), plural: true })
        );
        assert_eq!(
            vocab.denominator("billionth", false),
            Some(Denominator { value: Number::Integer(1_000_000_000_000), plural: false })
        );
        assert_eq!(vocab.denominator("second", true), None);
        assert_eq!(vocab.denominator("tens", true), None);
    }

    #[test]
    fn test_duration_words() {
        let vocab = english();
        let word = vocab.duration_word("minute").unwrap();
        assert_eq!(word.unit, DurationUnit::Minute);
        assert_eq!(word.form, UnitForm::Singular);
        assert!(vocab.duration_word("μs").unwrap().is_abbreviation());
        assert!(vocab.duration_word("µs").unwrap().is_abbreviation());
        assert_eq!(vocab.duration_word("millenia").unwrap().form, UnitForm::Variant);
        assert_eq!(vocab.unit_name(DurationUnit::Century, true), Some("centuries"));
        assert!(vocab.duration_word("grams").is_none());
    }

    #[test]
    fn test_formatting_lookups() {
        let vocab = english();
        assert_eq!(vocab.cardinal_word(0), Some("zero"));
        assert_eq!(vocab.cardinal_word(13), Some("thirteen"));
        assert_eq!(vocab.cardinal_word(60), Some("sixty"));
        assert_eq!(vocab.cardinal_word(61), None);
        assert_eq!(vocab.fraction_name(4, true), Some("quarters"));
        assert_eq!(vocab.negative_word(), Some("minus"));

        let magnitudes = vocab.magnitudes_descending(true);
        assert_eq!(magnitudes.first(), Some(&(18, "quintillion")));
        assert_eq!(magnitudes.last(), Some(&(3, "thousand")));
    }

    #[test]
    fn test_connectors_and_articles() {
        let vocab = english();
        assert!(vocab.is_connector(","));
        assert!(vocab.is_connector("and"));
        assert!(vocab.is_article("the"));
        assert!(!vocab.is_indefinite_article("the"));
        assert!(vocab.is_group_separator(","));
        assert_eq!(vocab.approximator("couple"), Some(2));
    }

    #[test]
    fn test_rejects_unknown_ordinal_target() {
        let yaml = ENGLISH_YAML.replace("tenth: ten", "tenth: tem");
        assert!(matches!(
            LocaleVocabulary::from_yaml_str(&yaml),
            Err(ConfigError::Vocabulary(_))
        ));
    }

    #[test]
    fn test_rejects_unsupported_language() {
        let yaml = ENGLISH_YAML.replace("language: en", "language: xx");
        assert!(matches!(
            LocaleVocabulary::from_yaml_str(&yaml),
            Err(ConfigError::Core(_))
        ));
    }
}
