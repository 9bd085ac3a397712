//!
//! AST wrapper for table declarations.
//!
//! Only the keyword, the name and an empty brace pair are modelled; column
//! definitions are not part of the tree yet.

use crate::syntax_utils::ident_text;

ast_node!(
    /// Typed wrapper for a `table name { }` declaration.
    TableDecl,
    crate::SyntaxKind::N_TABLE_DECL
);

impl TableDecl {
    /// Name of the table if present.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        ident_text(&self.syntax)
    }
}
