//! Cursor over a token sequence with O(1) backtracking

use crate::tokenizer::{tokenize, Token};

/// Saved cursor position, restored with [`TokenStream::reset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(usize);

impl Mark {
    pub fn position(self) -> usize {
        self.0
    }
}

/// Owned token sequence plus a read position.
///
/// Extractors only move through the tokens with `peek`, `advance`, `mark` and
/// `reset`; a failed parse branch restores its mark before returning.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(tokenize(text))
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn finished(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Token `offset` places after the cursor
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.position + offset)
    }

    /// Lowercase text of the token `offset` places after the cursor
    pub fn peek_normalized(&self, offset: usize) -> Option<&str> {
        self.peek(offset).map(|t| t.normalized.as_str())
    }

    /// Return the current token and move past it
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    pub fn mark(&self) -> Mark {
        Mark(self.position)
    }

    /// # Panics
    ///
    /// If `mark` lies beyond the end of this stream.
    pub fn reset(&mut self, mark: Mark) {
        assert!(
            mark.0 <= self.tokens.len(),
            "mark {} out of range for {} tokens",
            mark.0,
            self.tokens.len()
        );
        self.position = mark.0;
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance() {
        let mut ts = TokenStream::from_text("one two three");
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.peek_normalized(1), Some("two"));
        assert_eq!(ts.advance().map(|t| t.text.as_str()), Some("one"));
        assert_eq!(ts.position(), 1);
        assert_eq!(ts.peek_normalized(2), None);
    }

    #[test]
    fn test_mark_and_reset() {
        let mut ts = TokenStream::from_text("one two three");
        let mark = ts.mark();
        ts.advance();
        ts.advance();
        ts.advance();
        assert!(ts.finished());
        assert!(ts.advance().is_none());
        ts.reset(mark);
        assert_eq!(ts.position(), 0);
        assert!(!ts.finished());
    }

    #[test]
    fn test_empty_stream_is_finished() {
        let ts = TokenStream::from_text("");
        assert!(ts.is_empty());
        assert!(ts.finished());
    }

    #[test]
    #[should_panic]
    fn test_reset_out_of_range_panics() {
        let mut long = TokenStream::from_text("a b c d");
        long.advance();
        long.advance();
        long.advance();
        let mark = long.mark();
        let mut short = TokenStream::from_text("a");
        short.reset(mark);
    }
}
