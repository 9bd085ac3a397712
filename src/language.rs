//! `rowan` integration and Kuneiform syntax kinds.
//!
//! This module defines the `SyntaxKind` enum covering every token, keyword
//! and composite node the parser produces. The enumeration is used by `rowan`
//! to tag syntax tree elements. The `KuneiformLanguage` newtype implements
//! `rowan::Language` using conversions provided by `num_derive`.

use num_derive::{FromPrimitive as FromPrimitiveDerive, ToPrimitive as ToPrimitiveDerive};
use num_traits::{FromPrimitive, ToPrimitive};
use rowan::Language as RowanLanguage;
use rowan::SyntaxKind as RowanSyntaxKind;

/// Every possible token or node in the Kuneiform syntax tree.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitiveDerive, ToPrimitiveDerive,
)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "kinds are grouped by prefix")]
pub enum SyntaxKind {
    // Punctuation
    T_COLON,
    T_SEMI,
    T_LPAREN,
    T_RPAREN,
    T_LBRACE,
    T_RBRACE,
    T_COMMA,
    T_DOLLAR,
    T_HASH,
    T_AT,
    T_DOT,
    // Operators
    T_EQ,
    T_PLUS,
    T_MINUS,
    T_STAR,
    T_SLASH,
    T_PERCENT,
    T_TILDE,
    T_PIPE_PIPE,
    T_SHL,
    T_SHR,
    T_AMP,
    T_PIPE,
    T_EQEQ,
    T_LT,
    T_LTE,
    T_GT,
    T_GTE,
    T_NEQ,
    T_LTGT,
    // Generic classes
    T_IDENT,
    T_NUMBER,
    T_WHITESPACE,
    T_COMMENT,
    T_ERROR,
    // Keywords
    K_DATABASE,
    K_USE,
    K_TABLE,
    K_ACTION,
    // Nodes
    N_DB_DIRECTIVE,
    N_EXT_DIRECTIVE,
    N_TABLE_DECL,
    N_ACTION_DECL,
    N_PARAM_DECL,
    N_ASSIGN_STMT,
    N_VAR_EXPR,
    N_BIN_EXPR,
    N_INT_LIT_EXPR,
    N_SOURCE_FILE,
}

impl SyntaxKind {
    /// Whitespace and comments: kept in the tree, skipped by the grammar.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::T_WHITESPACE | Self::T_COMMENT)
    }

    /// Returns `true` for `database`, `use`, `table` and `action`.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::K_DATABASE | Self::K_USE | Self::K_TABLE | Self::K_ACTION
        )
    }

    /// Returns `true` for composite node kinds.
    #[must_use]
    pub fn is_node(self) -> bool {
        self >= Self::N_DB_DIRECTIVE
    }
}

/// Newtype wrapper allowing `rowan` to store `SyntaxKind` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KuneiformLanguage;

impl RowanLanguage for KuneiformLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: RowanSyntaxKind) -> Self::Kind {
        SyntaxKind::from_u16(raw.0).unwrap_or(SyntaxKind::T_ERROR)
    }

    fn kind_to_raw(kind: Self::Kind) -> RowanSyntaxKind {
        RowanSyntaxKind(
            kind.to_u16()
                .unwrap_or_else(|| unreachable!("all SyntaxKind variants map to u16")),
        )
    }
}

/// Composite node in the Kuneiform CST.
pub type SyntaxNode = rowan::SyntaxNode<KuneiformLanguage>;
/// Leaf token in the Kuneiform CST.
pub type SyntaxToken = rowan::SyntaxToken<KuneiformLanguage>;
/// Either a node or a token.
pub type SyntaxElement = rowan::SyntaxElement<KuneiformLanguage>;
