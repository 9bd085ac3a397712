//! Parser session state and low-level operations.
//!
//! A [`Parser`] owns one token cursor and one marker list for the duration
//! of a single parse. It is created per call and never shared, so independent
//! inputs can be parsed on separate threads without coordination.

use log::debug;
use rowan::GreenNode;

use super::cst_builder::{BuildError, build_green_tree};
use super::marker::{Marker, Markers};
use super::token_stream::TokenStream;
use crate::{SyntaxKind, Token};

#[derive(Debug)]
pub(crate) struct Parser<'src> {
    pub(super) stream: TokenStream<'src>,
    pub(super) markers: Markers,
}

impl<'src> Parser<'src> {
    #[must_use]
    pub(crate) fn new(tokens: Vec<Token<'src>>) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            markers: Markers::default(),
        }
    }

    /// Kind of the current significant token, `None` at end of input.
    #[must_use]
    pub(crate) fn current(&self) -> Option<SyntaxKind> {
        self.stream.current()
    }

    #[must_use]
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == Some(kind)
    }

    #[must_use]
    pub(crate) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        self.current().is_some_and(|k| kinds.contains(&k))
    }

    pub(crate) fn advance(&mut self) {
        self.stream.advance();
    }

    /// Consumes the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn mark(&mut self) -> Marker {
        Marker::open(self)
    }

    /// Replays the recorded markers over the token sequence to produce the
    /// green tree.
    ///
    /// # Errors
    /// Returns a [`BuildError`] when the markers are not properly nested,
    /// which indicates a defect in the grammar rules.
    pub(crate) fn finish(self) -> Result<GreenNode, BuildError> {
        debug!(
            "building tree from {} tokens and {} markers",
            self.stream.tokens().len(),
            self.markers.len()
        );
        build_green_tree(self.stream.tokens(), &self.markers)
    }
}
