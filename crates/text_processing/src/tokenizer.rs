//! Tokenizer for spoken-number text
//!
//! Splits on Unicode word boundaries, then separates letter runs, digit runs
//! and single symbols inside each segment so that "18s" becomes `18` + `s`
//! and "twenty-three" becomes `twenty` + `-` + `three`. Digit runs carry
//! their numeric value; "3.5" and "1,000" stay one token.

use unicode_segmentation::UnicodeSegmentation;
use voice_numbers_core::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
    Symbol,
}

/// A token with its byte offsets in the original text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Original text, case preserved
    pub text: String,
    /// Lowercase form used for vocabulary lookups
    pub normalized: String,
    /// Byte offset (inclusive) in the original text
    pub start: usize,
    /// Byte offset (exclusive) in the original text
    pub end: usize,
    /// Whether whitespace separates this token from the previous one
    pub whitespace_before: bool,
    /// Value of a number literal
    pub value: Option<Number>,
}

impl Token {
    fn new(kind: TokenKind, text: &str, start: usize, whitespace_before: bool) -> Self {
        let value = match kind {
            TokenKind::Number => parse_literal(text),
            _ => None,
        };
        Self {
            kind,
            text: text.to_string(),
            normalized: text.to_lowercase(),
            start,
            end: start + text.len(),
            whitespace_before,
            value,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn is_symbol(&self, symbol: char) -> bool {
        self.kind == TokenKind::Symbol && self.text.chars().eq(std::iter::once(symbol))
    }

    /// A plain digit run, without separators or a decimal point
    pub fn is_plain_digits(&self) -> bool {
        self.is_number() && self.text.bytes().all(|b| b.is_ascii_digit())
    }
}

fn parse_literal(text: &str) -> Option<Number> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    if digits.contains('.') {
        return digits.parse::<f64>().ok().map(Number::Decimal);
    }
    match digits.parse::<i64>() {
        Ok(value) => Some(Number::Integer(value)),
        // too long for an i64
        Err(_) => digits.parse::<f64>().ok().map(Number::Decimal),
    }
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Tokenize `text`. Never fails; empty or blank input gives no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut whitespace_before = false;

    for (offset, segment) in text.split_word_bound_indices() {
        let chars: Vec<(usize, char)> = segment.char_indices().collect();
        let mut i = 0;

        while i < chars.len() {
            let (start, c) = chars[i];

            if c.is_whitespace() {
                whitespace_before = true;
                i += 1;
                continue;
            }

            let end = if c.is_ascii_digit() {
                digit_run_end(&chars, i)
            } else if c.is_alphabetic() {
                letter_run_end(&chars, i)
            } else {
                i + 1
            };

            let byte_end = chars.get(end).map_or(segment.len(), |(b, _)| *b);
            let kind = if c.is_ascii_digit() {
                TokenKind::Number
            } else if c.is_alphabetic() {
                TokenKind::Word
            } else {
                TokenKind::Symbol
            };

            tokens.push(Token::new(
                kind,
                &segment[start..byte_end],
                offset + start,
                whitespace_before,
            ));
            whitespace_before = false;
            i = end;
        }
    }

    tokens
}

/// Digits, at most one decimal point between digits, and `,` thousands
/// groups of exactly three digits before the decimal point
fn digit_run_end(chars: &[(usize, char)], mut i: usize) -> usize {
    let digit_at = |j: usize| chars.get(j).is_some_and(|(_, c)| c.is_ascii_digit());
    let mut seen_point = false;

    while digit_at(i) {
        i += 1;
    }
    loop {
        match chars.get(i).map(|(_, c)| *c) {
            Some(',')
                if !seen_point
                    && (1..=3).all(|k| digit_at(i + k))
                    && !digit_at(i + 4) =>
            {
                i += 4;
            }
            Some('.') if !seen_point && digit_at(i + 1) => {
                seen_point = true;
                i += 1;
                while digit_at(i) {
                    i += 1;
                }
            }
            _ => return i,
        }
    }
}

/// Letters, with apostrophes kept when they sit between letters ("it's")
fn letter_run_end(chars: &[(usize, char)], mut i: usize) -> usize {
    let letter_at = |j: usize| chars.get(j).is_some_and(|(_, c)| c.is_alphabetic());

    while i < chars.len() {
        let c = chars[i].1;
        if c.is_alphabetic() {
            i += 1;
        } else if is_apostrophe(c) && letter_at(i + 1) {
            i += 2;
        } else {
            break;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_words_and_numbers() {
        let tokens = tokenize("Give me 18s, please");
        assert_eq!(texts(&tokens), vec!["Give", "me", "18", "s", ",", "please"]);
        assert_eq!(tokens[0].normalized, "give");
        assert_eq!(tokens[2].value, Some(Number::Integer(18)));
        assert!(tokens[2].whitespace_before);
        assert!(!tokens[3].whitespace_before);
        assert_eq!(tokens[3].kind, TokenKind::Word);
        assert_eq!(tokens[4].kind, TokenKind::Symbol);
    }

    #[test]
    fn test_offsets_slice_original() {
        let text = "it took 7 μs";
        for token in tokenize(text) {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_decimal_and_grouped_literals() {
        let tokens = tokenize("3.25 and 1,000,000 but 1,00");
        assert_eq!(tokens[0].value, Some(Number::Decimal(3.25)));
        assert_eq!(tokens[2].value, Some(Number::Integer(1_000_000)));
        assert_eq!(texts(&tokens[4..]), vec!["1", ",", "00"]);
    }

    #[test]
    fn test_trailing_point_is_symbol() {
        let tokens = tokenize("wait 5.");
        assert_eq!(texts(&tokens), vec!["wait", "5", "."]);
        assert_eq!(tokens[1].value, Some(Number::Integer(5)));
    }

    #[test]
    fn test_huge_literal_falls_back_to_decimal() {
        let tokens = tokenize("99999999999999999999");
        assert!(tokens[0].value.is_some_and(|v| v.is_decimal()));
    }

    #[test]
    fn test_hyphen_and_apostrophe() {
        assert_eq!(texts(&tokenize("twenty-three")), vec!["twenty", "-", "three"]);
        assert_eq!(texts(&tokenize("it's been")), vec!["it's", "been"]);
    }

    #[test]
    fn test_micro_sign_is_a_word() {
        let tokens = tokenize("28μs");
        assert_eq!(texts(&tokens), vec!["28", "μs"]);
        assert!(tokens[1].is_word());
    }

    proptest! {
        #[test]
        fn prop_tokens_are_ordered_and_in_bounds(text in "\\PC{0,40}") {
            let tokens = tokenize(&text);
            let mut last_end = 0;
            for token in &tokens {
                prop_assert!(token.start >= last_end);
                prop_assert!(token.end > token.start);
                prop_assert_eq!(&text[token.start..token.end], token.text.as_str());
                last_end = token.end;
            }
        }
    }
}
