//! Library crate for kuneiform-cst.
//!
//! Parses Kuneiform source into a lossless concrete syntax tree. Exposes the
//! tokenizer, the parser entry point and typed views over the tree.

#![forbid(unsafe_code)]

pub mod language;
pub mod parser;
pub mod syntax_utils;
pub mod tokenizer;

pub use language::{KuneiformLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use parser::{Parsed, ast, parse};
pub use tokenizer::{Span, Token, tokenize, tokenize_without_trivia};
