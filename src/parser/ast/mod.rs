//!
//! Light-weight AST wrappers built around `rowan` syntax nodes.
//!
//! These wrappers expose typed, read-only views over the CST produced by the
//! parser. Every accessor filters the direct children of one node by kind and
//! allocates a fresh result on each call; nothing is cached and nothing is
//! stored outside the tree itself.

use crate::{SyntaxKind, SyntaxNode};

/// Common interface for AST wrappers.
pub trait AstNode: Sized {
    /// Returns `true` if nodes of `kind` can be viewed as `Self`.
    fn can_cast(kind: SyntaxKind) -> bool;

    /// View `syntax` as `Self` if its kind matches.
    fn cast(syntax: SyntaxNode) -> Option<Self>;

    /// Access the underlying syntax node.
    fn syntax(&self) -> &SyntaxNode;
}

/// Declares a wrapper struct for a single node kind.
macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $kind:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            pub(crate) syntax: $crate::SyntaxNode,
        }

        impl $crate::parser::ast::AstNode for $name {
            fn can_cast(kind: $crate::SyntaxKind) -> bool {
                kind == $kind
            }

            fn cast(syntax: $crate::SyntaxNode) -> Option<Self> {
                if Self::can_cast(syntax.kind()) {
                    Some(Self { syntax })
                } else {
                    None
                }
            }

            fn syntax(&self) -> &$crate::SyntaxNode {
                &self.syntax
            }
        }

        impl $name {
            /// Source text covered by this node, trivia included.
            #[must_use]
            pub fn text(&self) -> String {
                self.syntax.text().to_string()
            }

            /// Byte range covered by this node.
            #[must_use]
            pub fn text_range(&self) -> rowan::TextRange {
                self.syntax.text_range()
            }
        }
    };
}

/// All direct children of `parent` that can be viewed as `N`.
fn children<N: AstNode>(parent: &SyntaxNode) -> Vec<N> {
    parent.children().filter_map(N::cast).collect()
}

/// The first direct child of `parent` that can be viewed as `N`.
fn child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
    parent.children().find_map(N::cast)
}

/// `$` followed by the node's identifier, or a bare `$` when it is missing.
fn dollar_name(node: &SyntaxNode) -> String {
    format!("${}", crate::syntax_utils::ident_text(node).unwrap_or_default())
}

mod action;
mod directive;
mod expr;
mod root;
mod stmt;
mod table;

pub use action::{ActionDecl, ParamDecl};
pub use directive::{DbDirective, ExtDirective};
pub use expr::{BinExpr, BinaryOp, Expr, IntLitExpr, VarExpr};
pub use root::{Decl, SourceFile};
pub use stmt::{AssignStmt, Stmt};
pub use table::TableDecl;
