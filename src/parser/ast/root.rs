//!
//! Wrapper for the root `N_SOURCE_FILE` node.
//!
//! Provides typed accessors for top-level items: the database directive,
//! extension directives, and table and action declarations.

use rowan::GreenNode;

use super::{ActionDecl, AstNode, DbDirective, ExtDirective, TableDecl, child, children};
use crate::{SyntaxKind, SyntaxNode};

ast_node!(
    /// The root of a parsed Kuneiform file.
    SourceFile,
    SyntaxKind::N_SOURCE_FILE
);

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decl {
    Table(TableDecl),
    Action(ActionDecl),
}

impl Decl {
    /// Name of the declared table or action if present.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        match self {
            Self::Table(table) => table.name(),
            Self::Action(action) => action.name(),
        }
    }
}

impl AstNode for Decl {
    fn can_cast(kind: SyntaxKind) -> bool {
        TableDecl::can_cast(kind) || ActionDecl::can_cast(kind)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        match syntax.kind() {
            SyntaxKind::N_TABLE_DECL => TableDecl::cast(syntax).map(Self::Table),
            SyntaxKind::N_ACTION_DECL => ActionDecl::cast(syntax).map(Self::Action),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Table(table) => table.syntax(),
            Self::Action(action) => action.syntax(),
        }
    }
}

impl SourceFile {
    /// Create a new `SourceFile` from a green node.
    #[must_use]
    pub fn from_green(green: GreenNode) -> Self {
        Self {
            syntax: SyntaxNode::new_root(green),
        }
    }

    /// The `database` directive, if any.
    #[must_use]
    pub fn db_directive(&self) -> Option<DbDirective> {
        child(&self.syntax)
    }

    /// All `use` directives in source order.
    #[must_use]
    pub fn ext_directives(&self) -> Vec<ExtDirective> {
        children(&self.syntax)
    }

    /// All table declarations.
    #[must_use]
    pub fn table_decls(&self) -> Vec<TableDecl> {
        children(&self.syntax)
    }

    /// All action declarations.
    #[must_use]
    pub fn action_decls(&self) -> Vec<ActionDecl> {
        children(&self.syntax)
    }

    /// Tables and actions interleaved in source order.
    #[must_use]
    pub fn declarations(&self) -> Vec<Decl> {
        children(&self.syntax)
    }
}
