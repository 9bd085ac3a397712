//! Token stream utilities.
//!
//! Provides a cursor over the full token sequence for the grammar rules.
//! Trivia stays in the sequence so the CST builder can embed it later, but
//! the cursor never rests on a whitespace or comment token.

use crate::{SyntaxKind, Token};

#[derive(Debug)]
pub(crate) struct TokenStream<'src> {
    tokens: Vec<Token<'src>>,
    cursor: usize,
}

impl<'src> TokenStream<'src> {
    /// Constructs a stream positioned on the first significant token.
    #[must_use]
    pub(crate) fn new(tokens: Vec<Token<'src>>) -> Self {
        let mut stream = Self { tokens, cursor: 0 };
        stream.skip_trivia();
        stream
    }

    /// Index of the current token within the full sequence.
    #[must_use]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Kind of the current significant token, or `None` at end of input.
    #[must_use]
    pub(crate) fn current(&self) -> Option<SyntaxKind> {
        self.tokens.get(self.cursor).map(|t| t.kind)
    }

    /// Moves past the current token and any trivia following it.
    ///
    /// Does nothing at end of input.
    pub(crate) fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
            self.skip_trivia();
        }
    }

    /// Restores a cursor previously obtained from [`Self::cursor`].
    pub(crate) fn reset(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.tokens.len());
    }

    #[must_use]
    pub(crate) fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.cursor)
            .is_some_and(|t| t.kind.is_trivia())
        {
            self.cursor += 1;
        }
    }
}
