//! Duration extraction
//!
//! Scans a token stream for the first contiguous run of duration groups and
//! sums them. A group is either a number followed by a unit ("twenty
//! minutes", "5 ns", "a couple of hours") or a bare unit word counting as
//! one ("an hour", "millisecond"). Groups may be separated by connectors
//! ("and", ","); the run ends at the first position where no group starts.
//! A sign on the first group applies to the whole run, so "minus one hour
//! one minute" is -3660 seconds.

use voice_numbers_config::{LocaleVocabulary, UnitForm};
use voice_numbers_core::{CalendarConvention, Duration, DurationAccumulator, DurationUnit, Number};

use crate::number_extraction::{ExtractedNumber, QuantityKind};
use crate::token_stream::{Mark, TokenStream};

pub const DEFAULT_MAX_NOISE_RUN: usize = 3;

enum GroupOutcome {
    /// A group was added; whether its count was negative
    Found { negative: bool },
    /// A number with no unit after it, ending at `after_number`
    Unitless { after_number: Mark },
    Nothing,
}

enum ScanState {
    /// No group found yet
    Seeking,
    /// At least one group found; trying to extend the run
    InGroupRun { accumulator: DurationAccumulator, negative: bool },
    Done(Option<Duration>),
}

#[derive(Debug, Clone, Copy)]
pub struct DurationExtractor<'v> {
    vocabulary: &'v LocaleVocabulary,
    calendar: CalendarConvention,
    max_noise_run: usize,
}

impl<'v> DurationExtractor<'v> {
    pub fn new(vocabulary: &'v LocaleVocabulary, calendar: CalendarConvention) -> Self {
        Self {
            vocabulary,
            calendar,
            max_noise_run: DEFAULT_MAX_NOISE_RUN,
        }
    }

    /// Most connector or article tokens skipped between a number and its
    /// unit, and between two groups
    pub fn with_max_noise_run(mut self, max_noise_run: usize) -> Self {
        self.max_noise_run = max_noise_run;
        self
    }

    /// Extract the first duration in `ts`, reading numbers with
    /// `extract_number`.
    ///
    /// Returns `None` when no group was found, which is distinct from a
    /// zero duration ("zero seconds"). On success the cursor sits right after
    /// the last group.
    pub fn extract_duration<F>(&self, ts: &mut TokenStream, mut extract_number: F) -> Option<Duration>
    where
        F: FnMut(&mut TokenStream) -> Option<ExtractedNumber>,
    {
        let mut state = ScanState::Seeking;
        loop {
            state = match state {
                ScanState::Seeking if ts.finished() => {
                    tracing::trace!("No duration group in stream");
                    ScanState::Done(None)
                }
                ScanState::Seeking => {
                    let mut accumulator = DurationAccumulator::new();
                    match self.group(ts, &mut extract_number, &mut accumulator, false) {
                        GroupOutcome::Found { negative } => ScanState::InGroupRun { accumulator, negative },
                        // a unitless number is skipped whole, keeping the scan linear
                        GroupOutcome::Unitless { after_number } => {
                            ts.reset(after_number);
                            ScanState::Seeking
                        }
                        GroupOutcome::Nothing => {
                            ts.advance();
                            ScanState::Seeking
                        }
                    }
                }
                ScanState::InGroupRun {
                    mut accumulator,
                    negative,
                } => {
                    let after_last_group = ts.mark();
                    self.skip_connectors(ts);
                    if let GroupOutcome::Found { .. } =
                        self.group(ts, &mut extract_number, &mut accumulator, negative)
                    {
                        ScanState::InGroupRun { accumulator, negative }
                    } else {
                        ts.reset(after_last_group);
                        tracing::debug!(
                            groups = accumulator.groups(),
                            end = ts.position(),
                            "Duration group run finished"
                        );
                        ScanState::Done(accumulator.finish())
                    }
                }
                ScanState::Done(duration) => return duration,
            };
        }
    }

    /// Try one group at the cursor; on failure the cursor is unchanged.
    ///
    /// In a `negative_run` unsigned counts are subtracted.
    fn group<F>(
        &self,
        ts: &mut TokenStream,
        extract_number: &mut F,
        accumulator: &mut DurationAccumulator,
        negative_run: bool,
    ) -> GroupOutcome
    where
        F: FnMut(&mut TokenStream) -> Option<ExtractedNumber>,
    {
        let start = ts.mark();
        let mut unitless = None;

        if let Some(number) = extract_number(ts) {
            let after_number = ts.mark();
            if let Some(unit) = self.unit_after_number(ts, number.kind) {
                let count = if negative_run && !number.value.is_negative() {
                    -number.value
                } else {
                    number.value
                };
                tracing::trace!(%count, ?unit, "Duration group");
                accumulator.add(count, unit.nanos(&self.calendar));
                return GroupOutcome::Found {
                    negative: count.is_negative(),
                };
            }
            unitless = Some(after_number);
            ts.reset(start);
        }

        if let Some(unit) = self.bare_unit(ts) {
            tracing::trace!(?unit, "Bare duration unit");
            let count = if negative_run { Number::Integer(-1) } else { Number::Integer(1) };
            accumulator.add(count, unit.nanos(&self.calendar));
            return GroupOutcome::Found {
                negative: negative_run,
            };
        }

        match unitless {
            Some(after_number) => GroupOutcome::Unitless { after_number },
            None => GroupOutcome::Nothing,
        }
    }

    /// Unit after a number, skipping a bounded run of connectors and
    /// articles. "of" is skipped only after fractions and approximators.
    fn unit_after_number(&self, ts: &mut TokenStream, kind: QuantityKind) -> Option<DurationUnit> {
        let mark = ts.mark();
        let mut skipped = 0;

        while let Some(word) = ts.peek_normalized(0) {
            if let Some(duration_word) = self.vocabulary.duration_word(word) {
                ts.advance();
                if duration_word.form == UnitForm::Singular {
                    self.detached_plural(ts);
                }
                return Some(duration_word.unit);
            }

            let noise = self.vocabulary.is_connector(word)
                || self.vocabulary.is_article(word)
                || (kind.allows_of() && self.vocabulary.is_of(word));
            if !noise || skipped == self.max_noise_run {
                break;
            }
            ts.advance();
            skipped += 1;
        }

        ts.reset(mark);
        None
    }

    /// A full unit word standing for one unit, optionally after an
    /// indefinite article. Abbreviations never stand alone.
    fn bare_unit(&self, ts: &mut TokenStream) -> Option<DurationUnit> {
        let mark = ts.mark();
        if ts
            .peek_normalized(0)
            .is_some_and(|word| self.vocabulary.is_indefinite_article(word))
        {
            ts.advance();
        }

        let duration_word = ts
            .peek_normalized(0)
            .and_then(|word| self.vocabulary.duration_word(word))
            .filter(|w| !w.is_abbreviation());
        match duration_word {
            Some(duration_word) => {
                ts.advance();
                if duration_word.form == UnitForm::Singular {
                    self.detached_plural(ts);
                }
                Some(duration_word.unit)
            }
            None => {
                ts.reset(mark);
                None
            }
        }
    }

    /// A plural suffix split off a singular unit word ("minute s")
    fn detached_plural(&self, ts: &mut TokenStream) {
        let suffix = ts
            .peek(0)
            .is_some_and(|t| t.is_word() && self.vocabulary.is_plural_suffix(&t.normalized));
        if suffix {
            ts.advance();
        }
    }

    fn skip_connectors(&self, ts: &mut TokenStream) {
        let mut skipped = 0;
        while skipped < self.max_noise_run
            && ts
                .peek_normalized(0)
                .is_some_and(|word| self.vocabulary.is_connector(word))
        {
            ts.advance();
            skipped += 1;
        }
    }
}
