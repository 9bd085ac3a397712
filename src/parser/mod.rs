//! Marker-driven parser producing a rowan CST.
//!
//! This module contains the entry point for parsing Kuneiform source code.
//! The input is tokenised with trivia retained, the grammar rules drive the
//! marker engine over the token sequence, and the recorded markers are
//! replayed into a `rowan::GreenNode`. Every token of the input ends up in the
//! tree exactly once and in order, so the root's text always equals the
//! source.

use log::debug;
use rowan::GreenNode;

use self::ast::AstNode;
use crate::{SyntaxNode, tokenize};

pub mod ast;
mod cst_builder;
mod grammar;
mod marker;
mod session;
mod token_stream;

pub(crate) use self::session::Parser;

/// Result of a parse operation.
#[derive(Debug, Clone)]
pub struct Parsed {
    green: GreenNode,
    root: ast::SourceFile,
}

impl Parsed {
    /// Access the `rowan` green tree.
    #[must_use]
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Access the typed root.
    #[must_use]
    pub fn root(&self) -> &ast::SourceFile {
        &self.root
    }

    /// Access the untyped root node.
    #[must_use]
    pub fn syntax(&self) -> &SyntaxNode {
        self.root.syntax()
    }
}

/// Parse the provided source string.
///
/// Parsing never fails on account of the input: empty, partial or garbled
/// text still yields a root whose text is exactly `src`. Constructs the
/// grammar does not recognise are kept as plain tokens under the nearest
/// enclosing node.
///
/// # Panics
/// Panics if the grammar rules leave the marker engine in an inconsistent
/// state. That is a defect in this crate, not a property of the input.
///
/// # Examples
///
/// ```rust
/// use kuneiform_cst::parse;
///
/// let parsed = parse("database abc;\nuse xyz;");
/// let root = parsed.root();
/// assert_eq!(root.db_directive().and_then(|d| d.name()), Some("abc".into()));
/// assert_eq!(root.ext_directives().len(), 1);
/// assert_eq!(root.text(), "database abc;\nuse xyz;");
/// ```
#[must_use]
pub fn parse(src: &str) -> Parsed {
    let tokens = tokenize(src);
    debug!("tokenised {} bytes into {} tokens", src.len(), tokens.len());

    let mut parser = Parser::new(tokens);
    grammar::source_file(&mut parser);
    let green = parser
        .finish()
        .unwrap_or_else(|err| panic!("marker engine invariant violated: {err}"));
    let root = ast::SourceFile::from_green(green.clone());

    Parsed { green, root }
}
