//!
//! AST wrappers for statements inside an action body.

use super::{AstNode, Expr, child};
use crate::syntax_utils::ident_text;
use crate::{SyntaxKind, SyntaxNode};

ast_node!(
    /// Typed wrapper for a `$name = expr` assignment.
    AssignStmt,
    SyntaxKind::N_ASSIGN_STMT
);

impl AssignStmt {
    /// The assigned variable including its `$` sigil, if named.
    #[must_use]
    pub fn target(&self) -> Option<String> {
        ident_text(&self.syntax).map(|name| format!("${name}"))
    }

    /// The right-hand side expression, if present.
    #[must_use]
    pub fn expr(&self) -> Option<Expr> {
        child(&self.syntax)
    }
}

/// A statement in an action body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    Assign(AssignStmt),
}

impl Stmt {
    /// The assignment, if this statement is one.
    #[must_use]
    pub fn as_assign(&self) -> Option<&AssignStmt> {
        match self {
            Self::Assign(assign) => Some(assign),
        }
    }

    /// Source text covered by this statement.
    #[must_use]
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }
}

impl AstNode for Stmt {
    fn can_cast(kind: SyntaxKind) -> bool {
        AssignStmt::can_cast(kind)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        AssignStmt::cast(syntax).map(Self::Assign)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Assign(assign) => assign.syntax(),
        }
    }
}
