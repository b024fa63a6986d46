//! Number-word grammar
//!
//! Resolves the longest number phrase starting at the cursor:
//! - cardinals with magnitudes ("two million, three hundred and five")
//! - digit literals, optionally scaled ("5 million") or ordinal ("21st")
//! - year-style pairs ("nineteen eighty four", "seventeen twenty eight")
//! - ordinals ("twenty third", "thousandth"), when allowed
//! - decimals ("one point two five", "point 3")
//! - fractions ("two tenths", "a third", "half", "one and a half")
//! - approximators ("a couple", "few", "plenty")
//!
//! Every attempt works on a [`TokenStream`] mark: a branch that does not match
//! restores the cursor, so the caller sees either a match and an advanced
//! cursor or no match and an untouched one.

use std::ops::Range;

use voice_numbers_config::{LocaleVocabulary, WordClass};
use voice_numbers_core::Number;

use crate::token_stream::TokenStream;

/// What kind of quantity a number phrase expresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    Cardinal,
    Ordinal,
    /// "two tenths", "half", "one and a half"
    Fraction,
    /// "a couple", "plenty"
    Approximate,
}

impl QuantityKind {
    /// Whether "of" may bind this quantity to what follows
    /// ("a couple of hours", "two tenths of a second")
    pub fn allows_of(self) -> bool {
        matches!(self, Self::Fraction | Self::Approximate)
    }
}

/// A number phrase and the token span `[start, end)` it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedNumber {
    pub value: Number,
    pub kind: QuantityKind,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupShape {
    Units,
    Teen,
    Tens,
    TensUnits,
    Hundreds,
    Year,
    Literal,
}

impl GroupShape {
    /// Heads and tails of year-style pairs ("nineteen" "eighty four")
    fn pairs_as_year(self) -> bool {
        matches!(self, Self::Teen | Self::Tens | Self::TensUnits)
    }
}

/// A value below one thousand, or a digit literal
#[derive(Debug, Clone, Copy)]
struct SmallGroup {
    value: Number,
    ordinal: bool,
    shape: GroupShape,
}

impl SmallGroup {
    fn new(value: i64, ordinal: bool, shape: GroupShape) -> Self {
        Self {
            value: Number::Integer(value),
            ordinal,
            shape,
        }
    }
}

/// Reads number phrases using one locale vocabulary
#[derive(Debug, Clone, Copy)]
pub struct NumberExtractor<'v> {
    vocabulary: &'v LocaleVocabulary,
    short_scale: bool,
    ordinals: bool,
}

impl<'v> NumberExtractor<'v> {
    pub fn new(vocabulary: &'v LocaleVocabulary, short_scale: bool, ordinals: bool) -> Self {
        Self {
            vocabulary,
            short_scale,
            ordinals,
        }
    }

    pub fn short_scale(&self) -> bool {
        self.short_scale
    }

    pub fn ordinals_allowed(&self) -> bool {
        self.ordinals
    }

    /// Like [`extract_one`](Self::extract_one) but never reads ordinals, so
    /// "second" is left for the duration vocabulary
    pub fn extract_one_no_ordinal(&self, ts: &mut TokenStream) -> Option<ExtractedNumber> {
        Self {
            ordinals: false,
            ..*self
        }
        .extract_one(ts)
    }

    /// Extract the number phrase starting at the cursor.
    ///
    /// On `None` the cursor is where it was before the call.
    pub fn extract_one(&self, ts: &mut TokenStream) -> Option<ExtractedNumber> {
        let start = ts.mark();

        let negative = self.negative_sign(ts);
        match self.unsigned(ts) {
            Some((value, kind)) => {
                let value = if negative { -value } else { value };
                tracing::trace!(%value, ?kind, start = start.position(), end = ts.position(), "Number phrase");
                Some(ExtractedNumber {
                    value,
                    kind,
                    span: start.position()..ts.position(),
                })
            }
            None => {
                ts.reset(start);
                None
            }
        }
    }

    /// "minus", "negative", or a "-" glued to a digit literal
    fn negative_sign(&self, ts: &mut TokenStream) -> bool {
        let Some(token) = ts.peek(0) else {
            return false;
        };
        let glued_minus = token.is_symbol('-')
            && ts
                .peek(1)
                .is_some_and(|next| next.is_number() && !next.whitespace_before);
        if self.vocabulary.is_negative(&token.normalized) || glued_minus {
            ts.advance();
            return true;
        }
        false
    }

    fn unsigned(&self, ts: &mut TokenStream) -> Option<(Number, QuantityKind)> {
        if let Some(count) = self.approximator(ts) {
            return Some((count, QuantityKind::Approximate));
        }
        if let Some(fraction) = self.lone_fraction(ts) {
            return Some((fraction, QuantityKind::Fraction));
        }

        if let Some((whole, ordinal)) = self.whole_number(ts) {
            if ordinal {
                return Some((whole, QuantityKind::Ordinal));
            }
            if let Some(decimals) = self.decimal_part(ts) {
                return Some((whole + decimals, QuantityKind::Cardinal));
            }
            if let Some(fraction) = self.denominator_after(ts, whole) {
                return Some((fraction, QuantityKind::Fraction));
            }
            if let Some(fraction) = self.mixed_fraction_tail(ts) {
                return Some((whole + fraction, QuantityKind::Fraction));
            }
            return Some((whole, QuantityKind::Cardinal));
        }

        self.decimal_part(ts)
            .map(|decimals| (decimals, QuantityKind::Cardinal))
    }

    /// Optional indefinite article followed by an approximator word
    fn approximator(&self, ts: &mut TokenStream) -> Option<Number> {
        let mark = ts.mark();
        self.indefinite_article(ts);

        let count = ts
            .peek_normalized(0)
            .and_then(|word| self.vocabulary.approximator(word));
        match count {
            Some(count) => {
                ts.advance();
                Some(Number::Integer(count))
            }
            None => {
                ts.reset(mark);
                None
            }
        }
    }

    /// "half", "quarter", or an indefinite article with a singular
    /// denominator ("a third", "an eighth")
    fn lone_fraction(&self, ts: &mut TokenStream) -> Option<Number> {
        let mark = ts.mark();
        let article = self.indefinite_article(ts);

        let fraction = ts.peek_normalized(0).and_then(|word| {
            let denominator = self.vocabulary.denominator(word, self.short_scale)?;
            let named = self.vocabulary.is_named_fraction(word);
            (!denominator.plural && (article || named)).then(|| Number::from(1) / denominator.value)
        });
        match fraction {
            Some(fraction) => {
                ts.advance();
                Some(fraction)
            }
            None => {
                ts.reset(mark);
                None
            }
        }
    }

    /// Groups joined by descending magnitudes. Returns the value and whether
    /// it was read as an ordinal.
    fn whole_number(&self, ts: &mut TokenStream) -> Option<(Number, bool)> {
        let mut group = match self.small_group(ts, true) {
            Some(group) => group,
            None => self.implicit_one(ts)?,
        };
        if group.ordinal {
            return Some((group.value, true));
        }

        let mut total = Number::Integer(0);
        let mut last_exponent: Option<u32> = None;
        loop {
            let below_last = |exponent: u32| last_exponent.map_or(true, |last| exponent < last);
            let word = ts.peek_normalized(0).unwrap_or_default();

            if let Some(exponent) = self
                .vocabulary
                .magnitude(word, self.short_scale)
                .filter(|e| below_last(*e))
            {
                ts.advance();
                let exponent = match self.thousand_compound(ts, exponent, last_exponent) {
                    Some((compound, true)) => {
                        return Some((total + group.value * Number::pow10(compound), true));
                    }
                    Some((compound, false)) => compound,
                    None => exponent,
                };
                total = total + group.value * Number::pow10(exponent);
                last_exponent = Some(exponent);
            } else if let Some(exponent) = self
                .vocabulary
                .ordinal_magnitude(word, self.short_scale)
                .filter(|e| self.ordinals && below_last(*e))
            {
                ts.advance();
                return Some((total + group.value * Number::pow10(exponent), true));
            } else {
                return Some((total + group.value, false));
            }

            let after_magnitude = ts.mark();
            if ts
                .peek_normalized(0)
                .is_some_and(|word| self.vocabulary.is_group_separator(word))
            {
                ts.advance();
            }
            match self.small_group(ts, false) {
                Some(next) if self.fits_below(ts, next, last_exponent) => {
                    if next.ordinal {
                        return Some((total + next.value, true));
                    }
                    group = next;
                }
                _ => {
                    ts.reset(after_magnitude);
                    return Some((total, false));
                }
            }
        }
    }

    /// Long-scale "thousand million", "thousand billion": a larger magnitude
    /// right after "thousand" multiplies it. Returns the combined exponent
    /// and whether the larger word was an ordinal ("thousand millionth").
    fn thousand_compound(
        &self,
        ts: &mut TokenStream,
        exponent: u32,
        last_exponent: Option<u32>,
    ) -> Option<(u32, bool)> {
        if self.short_scale || exponent != 3 {
            return None;
        }
        let fits = |larger: &u32| *larger > 3 && last_exponent.map_or(true, |last| larger + 3 < last);
        let word = ts.peek_normalized(0)?;

        if let Some(larger) = self.vocabulary.magnitude(word, false).filter(fits) {
            ts.advance();
            return Some((larger + 3, false));
        }
        let larger = self
            .vocabulary
            .ordinal_magnitude(word, false)
            .filter(|e| self.ordinals && fits(e))?;
        ts.advance();
        Some((larger + 3, true))
    }

    /// Whether `next` can follow a magnitude of `10^last_exponent`: it must
    /// be smaller and must not itself start a larger-or-equal magnitude.
    fn fits_below(&self, ts: &TokenStream, next: SmallGroup, last_exponent: Option<u32>) -> bool {
        let Some(last) = last_exponent else {
            return true;
        };
        if !next.value.less_than(Number::pow10(last)) {
            return false;
        }
        let word = ts.peek_normalized(0).unwrap_or_default();
        let following = self
            .vocabulary
            .magnitude(word, self.short_scale)
            .or_else(|| self.vocabulary.ordinal_magnitude(word, self.short_scale));
        following.map_or(true, |exponent| exponent < last)
    }

    /// Implicit "one" before a magnitude: "a million", "thousand"
    fn implicit_one(&self, ts: &mut TokenStream) -> Option<SmallGroup> {
        let mark = ts.mark();
        self.indefinite_article(ts);

        let word = ts.peek_normalized(0).unwrap_or_default();
        let magnitude = self.vocabulary.magnitude(word, self.short_scale).is_some()
            || (self.ordinals && self.vocabulary.ordinal_magnitude(word, self.short_scale).is_some());
        if magnitude {
            Some(SmallGroup::new(1, false, GroupShape::Units))
        } else {
            ts.reset(mark);
            None
        }
    }

    /// A value below one thousand or a digit literal.
    ///
    /// Year-style pairs are only read for the first group of a number. What
    /// follows does not matter, so "twenty thirty minutes" is 2030 minutes.
    fn small_group(&self, ts: &mut TokenStream, first: bool) -> Option<SmallGroup> {
        let token = ts.peek(0)?;
        if token.is_number() {
            return self.literal_group(ts);
        }

        let mark = ts.mark();
        let article_hundred = self.vocabulary.is_indefinite_article(&token.normalized)
            && ts
                .peek_normalized(1)
                .is_some_and(|word| self.vocabulary.is_hundred(word));
        if article_hundred {
            ts.advance();
        }
        if let Some(group) = self.hundreds(ts, 1) {
            return Some(group);
        }
        if article_hundred {
            ts.reset(mark);
            return None;
        }

        let head = self.below_hundred(ts)?;
        if head.ordinal {
            return Some(head);
        }
        if let Some(value) = head.value.integer_value() {
            if let Some(group) = self.hundreds(ts, value) {
                return Some(group);
            }
        }

        if first && head.shape.pairs_as_year() {
            let before_tail = ts.mark();
            if let Some(tail) = self.below_hundred(ts) {
                if tail.shape.pairs_as_year() && !self.starts_scale(ts) {
                    return Some(SmallGroup {
                        value: head.value * Number::from(100) + tail.value,
                        ordinal: tail.ordinal,
                        shape: GroupShape::Year,
                    });
                }
            }
            ts.reset(before_tail);
        }

        Some(head)
    }

    /// A digit literal, with an attached ordinal suffix ("21st") or a
    /// following "hundred" ("5 hundred")
    fn literal_group(&self, ts: &mut TokenStream) -> Option<SmallGroup> {
        let mark = ts.mark();
        let value = ts.peek(0)?.value?;
        ts.advance();

        let suffix = ts.peek(0).is_some_and(|next| {
            !next.whitespace_before && self.vocabulary.is_ordinal_suffix(&next.normalized)
        });
        if suffix {
            if !self.ordinals || !value.is_integer() {
                ts.reset(mark);
                return None;
            }
            ts.advance();
            return Some(SmallGroup {
                value,
                ordinal: true,
                shape: GroupShape::Literal,
            });
        }

        if let Some(small) = value.integer_value().filter(|v| (1..100).contains(v)) {
            if let Some(group) = self.hundreds(ts, small) {
                return Some(group);
            }
        }

        Some(SmallGroup {
            value,
            ordinal: false,
            shape: GroupShape::Literal,
        })
    }

    /// "hundred" (or "hundredth") multiplying `head`, with an optional
    /// "and" plus tens/units after it
    fn hundreds(&self, ts: &mut TokenStream, head: i64) -> Option<SmallGroup> {
        let word = ts.peek_normalized(0)?;

        if self.vocabulary.is_hundred(word) {
            ts.advance();
            let value = head * 100;
            return Some(match self.after_hundred(ts) {
                Some(tail) => SmallGroup {
                    value: Number::Integer(value) + tail.value,
                    ordinal: tail.ordinal,
                    shape: GroupShape::Hundreds,
                },
                None => SmallGroup::new(value, false, GroupShape::Hundreds),
            });
        }

        let ordinal_hundred = self
            .vocabulary
            .ordinal(word)
            .is_some_and(|entry| entry.class == WordClass::Hundred);
        if self.ordinals && ordinal_hundred {
            ts.advance();
            return Some(SmallGroup::new(head * 100, true, GroupShape::Hundreds));
        }
        None
    }

    fn after_hundred(&self, ts: &mut TokenStream) -> Option<SmallGroup> {
        let mark = ts.mark();
        if ts
            .peek_normalized(0)
            .is_some_and(|word| self.vocabulary.is_conjunction(word))
        {
            ts.advance();
        }
        let tail = self.below_hundred(ts);
        if tail.is_none() {
            ts.reset(mark);
        }
        tail
    }

    /// A single word below one hundred, or tens plus units ("twenty three",
    /// "twenty-three", "twenty third")
    fn below_hundred(&self, ts: &mut TokenStream) -> Option<SmallGroup> {
        let word = ts.peek_normalized(0)?;

        if let Some(entry) = self
            .vocabulary
            .cardinal(word)
            .filter(|e| e.class != WordClass::Hundred)
        {
            ts.advance();
            return Some(match entry.class {
                WordClass::Tens => self.tens_units(ts, entry.value),
                WordClass::Teen => SmallGroup::new(entry.value, false, GroupShape::Teen),
                _ => SmallGroup::new(entry.value, false, GroupShape::Units),
            });
        }

        let entry = self
            .vocabulary
            .ordinal(word)
            .filter(|e| self.ordinals && e.class != WordClass::Hundred)?;
        ts.advance();
        let shape = match entry.class {
            WordClass::Tens => GroupShape::Tens,
            WordClass::Teen => GroupShape::Teen,
            _ => GroupShape::Units,
        };
        Some(SmallGroup::new(entry.value, true, shape))
    }

    fn tens_units(&self, ts: &mut TokenStream, tens: i64) -> SmallGroup {
        let mark = ts.mark();
        let hyphen = ts
            .peek(0)
            .is_some_and(|t| t.is_symbol('-'))
            && ts.peek(1).is_some_and(|t| !t.whitespace_before);
        if hyphen {
            ts.advance();
        }

        let word = ts.peek_normalized(0).unwrap_or_default();
        let is_unit = |class: WordClass, value: i64| class == WordClass::Unit && value > 0;
        if let Some(unit) = self.vocabulary.cardinal(word).filter(|e| is_unit(e.class, e.value)) {
            ts.advance();
            return SmallGroup::new(tens + unit.value, false, GroupShape::TensUnits);
        }
        if let Some(unit) = self
            .vocabulary
            .ordinal(word)
            .filter(|e| self.ordinals && is_unit(e.class, e.value))
        {
            ts.advance();
            return SmallGroup::new(tens + unit.value, true, GroupShape::TensUnits);
        }

        ts.reset(mark);
        SmallGroup::new(tens, false, GroupShape::Tens)
    }

    /// Whether the cursor sits on "hundred" or a magnitude word
    fn starts_scale(&self, ts: &TokenStream) -> bool {
        ts.peek_normalized(0).is_some_and(|word| {
            self.vocabulary.is_hundred(word)
                || self.vocabulary.magnitude(word, self.short_scale).is_some()
                || self.vocabulary.ordinal_magnitude(word, self.short_scale).is_some()
                || self
                    .vocabulary
                    .ordinal(word)
                    .is_some_and(|e| e.class == WordClass::Hundred)
        })
    }

    /// "point" followed by digit words or digit literals
    fn decimal_part(&self, ts: &mut TokenStream) -> Option<Number> {
        let mark = ts.mark();
        if !ts
            .peek_normalized(0)
            .is_some_and(|word| self.vocabulary.is_decimal_point(word))
        {
            return None;
        }
        ts.advance();

        let mut digits = String::new();
        while let Some(token) = ts.peek(0) {
            if token.is_plain_digits() {
                digits.push_str(&token.text);
            } else if let Some(digit) = self
                .vocabulary
                .cardinal(&token.normalized)
                .filter(|e| e.class == WordClass::Unit)
                .and_then(|e| char::from_digit(e.value as u32, 10))
            {
                digits.push(digit);
            } else {
                break;
            }
            ts.advance();
        }

        match format!("0.{digits}").parse::<f64>() {
            Ok(value) if !digits.is_empty() => Some(Number::Decimal(value)),
            _ => {
                ts.reset(mark);
                None
            }
        }
    }

    /// Denominator right after a numerator: "two tenths", "one third".
    /// Singular denominators need a numerator of one.
    fn denominator_after(&self, ts: &mut TokenStream, numerator: Number) -> Option<Number> {
        let word = ts.peek_normalized(0)?;
        let denominator = self.vocabulary.denominator(word, self.short_scale)?;
        if !denominator.plural && !numerator.is_one() {
            return None;
        }
        ts.advance();
        Some(numerator / denominator.value)
    }

    /// "and a half", "and three quarters" after a whole number
    fn mixed_fraction_tail(&self, ts: &mut TokenStream) -> Option<Number> {
        let mark = ts.mark();
        if !ts
            .peek_normalized(0)
            .is_some_and(|word| self.vocabulary.is_conjunction(word))
        {
            return None;
        }
        ts.advance();

        let numerator = if self.indefinite_article(ts) {
            Some(Number::Integer(1))
        } else {
            self.small_group(ts, false)
                .filter(|group| !group.ordinal)
                .map(|group| group.value)
        };
        let fraction = numerator.and_then(|numerator| self.denominator_after(ts, numerator));
        if fraction.is_none() {
            ts.reset(mark);
        }
        fraction
    }

    fn indefinite_article(&self, ts: &mut TokenStream) -> bool {
        let article = ts
            .peek_normalized(0)
            .is_some_and(|word| self.vocabulary.is_indefinite_article(word));
        if article {
            ts.advance();
        }
        article
    }
}
