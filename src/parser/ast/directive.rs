//!
//! AST wrappers for `database` and `use` directives.

use crate::syntax_utils::ident_text;

ast_node!(
    /// Typed wrapper for the `database name;` directive.
    DbDirective,
    crate::SyntaxKind::N_DB_DIRECTIVE
);

ast_node!(
    /// Typed wrapper for a `use name;` extension directive.
    ExtDirective,
    crate::SyntaxKind::N_EXT_DIRECTIVE
);

impl DbDirective {
    /// Database name if present.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        ident_text(&self.syntax)
    }
}

impl ExtDirective {
    /// Extension name if present.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        ident_text(&self.syntax)
    }
}
