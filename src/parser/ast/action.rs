//!
//! AST wrappers for action declarations and their parameters.
//!
//! # Examples
//!
//! ```rust
//! use kuneiform_cst::parse;
//!
//! let parsed = parse("action bbb ($a, $b) { $a = $b * 2; }");
//! let action = parsed.root().action_decls().into_iter().next();
//! let params: Vec<String> = action
//!     .iter()
//!     .flat_map(|a| a.params())
//!     .map(|p| p.name())
//!     .collect();
//! assert_eq!(params, vec!["$a", "$b"]);
//! ```

use super::{Stmt, children};
use crate::syntax_utils::ident_text;

ast_node!(
    /// Typed wrapper for an `action` declaration.
    ActionDecl,
    crate::SyntaxKind::N_ACTION_DECL
);

ast_node!(
    /// Typed wrapper for a `$name` parameter.
    ParamDecl,
    crate::SyntaxKind::N_PARAM_DECL
);

impl ActionDecl {
    /// Name of the action if present.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        ident_text(&self.syntax)
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn params(&self) -> Vec<ParamDecl> {
        children(&self.syntax)
    }

    /// Body statements in source order.
    #[must_use]
    pub fn stmts(&self) -> Vec<Stmt> {
        children(&self.syntax)
    }
}

impl ParamDecl {
    /// The parameter name including its `$` sigil.
    ///
    /// A parameter whose identifier is missing is named `$`.
    #[must_use]
    pub fn name(&self) -> String {
        super::dollar_name(&self.syntax)
    }
}
