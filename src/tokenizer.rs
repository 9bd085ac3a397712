//! Lexical analysis for Kuneiform source.
//!
//! This module exposes [`tokenize`] and [`tokenize_without_trivia`], which
//! convert raw source text into a sequence of [`Token`]s. It uses the `logos`
//! crate to recognise tokens by longest match, so the CST can mirror the input
//! exactly: whitespace and comments are tokens like any other and every byte
//! of the input lands in exactly one token.

use log::warn;
use logos::Logos;
use phf::phf_map;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

/// A classified slice of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// Token classification.
    pub kind: SyntaxKind,
    /// Byte offsets of the token within the source.
    pub span: Span,
    /// The exact source slice covered by `span`.
    pub text: &'src str,
}

impl Token<'_> {
    /// Byte offset of the first character.
    #[must_use]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past the last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.span.end
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"\s+")]
    Whitespace,
    #[regex(r"//[^\r\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,
    #[regex(r"\p{Nd}+")]
    Number,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token("$")]
    Dollar,
    #[token("#")]
    Hash,
    #[token("@")]
    At,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("~")]
    Tilde,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("||")]
    PipePipe,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<")]
    Lt,
    #[token("<=")]
    Lte,
    #[token("<>")]
    LtGt,
    #[token(">")]
    Gt,
    #[token(">=")]
    Gte,
    #[token("!=")]
    Neq,
}

/// Consume the body of a `/*` comment through the closing `*/`.
///
/// An unterminated comment runs to the end of the input.
fn block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |idx| idx + 2);
    lex.bump(len);
    true
}

/// Keywords are matched case-insensitively against the lowercased identifier.
static KEYWORDS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    "database" => SyntaxKind::K_DATABASE,
    "use" => SyntaxKind::K_USE,
    "table" => SyntaxKind::K_TABLE,
    "action" => SyntaxKind::K_ACTION,
};

fn keyword_kind(ident: &str) -> Option<SyntaxKind> {
    KEYWORDS.get(ident.to_lowercase().as_str()).copied()
}

fn raw_kind(token: RawToken, text: &str) -> SyntaxKind {
    match token {
        RawToken::Whitespace => SyntaxKind::T_WHITESPACE,
        RawToken::LineComment | RawToken::BlockComment => SyntaxKind::T_COMMENT,
        RawToken::Ident => keyword_kind(text).unwrap_or(SyntaxKind::T_IDENT),
        RawToken::Number => SyntaxKind::T_NUMBER,
        RawToken::Colon => SyntaxKind::T_COLON,
        RawToken::Semi => SyntaxKind::T_SEMI,
        RawToken::LParen => SyntaxKind::T_LPAREN,
        RawToken::RParen => SyntaxKind::T_RPAREN,
        RawToken::LBrace => SyntaxKind::T_LBRACE,
        RawToken::RBrace => SyntaxKind::T_RBRACE,
        RawToken::Comma => SyntaxKind::T_COMMA,
        RawToken::Dollar => SyntaxKind::T_DOLLAR,
        RawToken::Hash => SyntaxKind::T_HASH,
        RawToken::At => SyntaxKind::T_AT,
        RawToken::Dot => SyntaxKind::T_DOT,
        RawToken::Eq => SyntaxKind::T_EQ,
        RawToken::EqEq => SyntaxKind::T_EQEQ,
        RawToken::Plus => SyntaxKind::T_PLUS,
        RawToken::Minus => SyntaxKind::T_MINUS,
        RawToken::Star => SyntaxKind::T_STAR,
        RawToken::Slash => SyntaxKind::T_SLASH,
        RawToken::Percent => SyntaxKind::T_PERCENT,
        RawToken::Tilde => SyntaxKind::T_TILDE,
        RawToken::Amp => SyntaxKind::T_AMP,
        RawToken::Pipe => SyntaxKind::T_PIPE,
        RawToken::PipePipe => SyntaxKind::T_PIPE_PIPE,
        RawToken::Shl => SyntaxKind::T_SHL,
        RawToken::Shr => SyntaxKind::T_SHR,
        RawToken::Lt => SyntaxKind::T_LT,
        RawToken::Lte => SyntaxKind::T_LTE,
        RawToken::LtGt => SyntaxKind::T_LTGT,
        RawToken::Gt => SyntaxKind::T_GT,
        RawToken::Gte => SyntaxKind::T_GTE,
        RawToken::Neq => SyntaxKind::T_NEQ,
    }
}

/// Tokenise the provided Kuneiform source.
///
/// The function is total: characters no rule recognises become `T_ERROR`
/// tokens and scanning carries on. Whitespace and comment tokens are kept, so
/// concatenating every token's text reproduces `src` exactly.
///
/// # Examples
///
/// ```rust
/// use kuneiform_cst::{SyntaxKind, tokenize};
///
/// let tokens = tokenize("<<<");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![SyntaxKind::T_SHL, SyntaxKind::T_LT]);
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    let mut lexer = RawToken::lexer(src);
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "rough capacity estimate"
    )]
    let estimated_tokens = src.len() / 4;
    let mut out = Vec::with_capacity(estimated_tokens);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        if span.is_empty() {
            continue;
        }
        let Some(text) = src.get(span.clone()) else {
            warn!(
                "token span {span:?} out of bounds for source of length {}",
                src.len()
            );
            continue;
        };
        let kind = result.map_or(SyntaxKind::T_ERROR, |token| raw_kind(token, text));
        out.push(Token { kind, span, text });
    }
    out
}

/// Tokenise the source, excluding whitespace and comments.
///
/// Returns only significant tokens.
///
/// # Examples
///
/// ```rust
/// use kuneiform_cst::{SyntaxKind, tokenize_without_trivia};
///
/// let tokens = tokenize_without_trivia("use foo; // ext");
/// assert!(!tokens.iter().any(|t| t.kind.is_trivia()));
/// assert_eq!(tokens.len(), 3);
/// ```
#[must_use]
pub fn tokenize_without_trivia(src: &str) -> Vec<Token<'_>> {
    tokenize(src)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(src: &str) -> Vec<SyntaxKind> {
        tokenize(src).iter().map(|t| t.kind).collect()
    }

    #[rstest]
    #[case("database", SyntaxKind::K_DATABASE)]
    #[case("DATABASE", SyntaxKind::K_DATABASE)]
    #[case("Use", SyntaxKind::K_USE)]
    #[case("tAbLe", SyntaxKind::K_TABLE)]
    #[case("action", SyntaxKind::K_ACTION)]
    #[case("actions", SyntaxKind::T_IDENT)]
    #[case("_private", SyntaxKind::T_IDENT)]
    #[case("a1_b2", SyntaxKind::T_IDENT)]
    fn keywords_are_case_insensitive(#[case] src: &str, #[case] expected: SyntaxKind) {
        assert_eq!(kinds(src), vec![expected]);
    }

    #[rstest]
    #[case("=", SyntaxKind::T_EQ)]
    #[case("==", SyntaxKind::T_EQEQ)]
    #[case("|", SyntaxKind::T_PIPE)]
    #[case("||", SyntaxKind::T_PIPE_PIPE)]
    #[case("<", SyntaxKind::T_LT)]
    #[case("<=", SyntaxKind::T_LTE)]
    #[case("<>", SyntaxKind::T_LTGT)]
    #[case("<<", SyntaxKind::T_SHL)]
    #[case(">", SyntaxKind::T_GT)]
    #[case(">=", SyntaxKind::T_GTE)]
    #[case(">>", SyntaxKind::T_SHR)]
    #[case("!=", SyntaxKind::T_NEQ)]
    #[case("/", SyntaxKind::T_SLASH)]
    fn operators_use_longest_match(#[case] src: &str, #[case] expected: SyntaxKind) {
        assert_eq!(kinds(src), vec![expected]);
    }

    #[test]
    fn greater_than_is_a_single_character() {
        let tokens = tokenize(">1");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec![">", "1"]);
        assert_eq!(tokens.first().map(|t| t.kind), Some(SyntaxKind::T_GT));
    }

    #[test]
    fn block_comment_stops_at_first_terminator() {
        let tokens = tokenize("/* a */ b */");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["/* a */", " ", "b", " ", "*", "/"]);
    }

    #[rstest]
    #[case("/**/")]
    #[case("/*/")]
    #[case("/*")]
    #[case("/* unterminated\n still comment")]
    fn block_comment_variants_cover_input(#[case] src: &str) {
        let tokens = tokenize(src);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.first().map(|t| t.kind), Some(SyntaxKind::T_COMMENT));
        assert_eq!(tokens.first().map(|t| t.text), Some(src));
    }

    #[test]
    fn line_comment_stops_before_carriage_return() {
        let tokens = tokenize("// note\r\nx");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["// note", "\r\n", "x"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn spans_match_text() {
        let src = "action a($x) { $x = 1 + 2; }";
        for token in tokenize(src) {
            assert_eq!(src.get(token.span.clone()), Some(token.text));
            assert_eq!(token.end() - token.start(), token.text.len());
        }
    }
}
