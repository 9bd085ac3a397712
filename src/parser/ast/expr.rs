//! Expression views for Kuneiform.
//!
//! [`Expr`] is a closed sum over the three expression node kinds the grammar
//! produces. Binary nodes hold their operands as direct child nodes, so
//! `lhs`/`rhs` are simply the first and second expression children.

use super::{AstNode, child, children};
use crate::syntax_utils::first_token;
use crate::{SyntaxKind, SyntaxNode, SyntaxToken};

ast_node!(
    /// A `$name` variable reference.
    VarExpr,
    SyntaxKind::N_VAR_EXPR
);

ast_node!(
    /// A binary arithmetic expression.
    BinExpr,
    SyntaxKind::N_BIN_EXPR
);

ast_node!(
    /// An integer literal.
    IntLitExpr,
    SyntaxKind::N_INT_LIT_EXPR
);

/// Binary operators in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Operator for a token kind, if it is one the grammar folds.
    #[must_use]
    pub fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::T_PLUS => Some(Self::Add),
            SyntaxKind::T_MINUS => Some(Self::Sub),
            SyntaxKind::T_STAR => Some(Self::Mul),
            SyntaxKind::T_SLASH => Some(Self::Div),
            SyntaxKind::T_PERCENT => Some(Self::Mod),
            _ => None,
        }
    }

    /// The operator as written in source.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

/// Parsed expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Var(VarExpr),
    Binary(BinExpr),
    IntLit(IntLitExpr),
}

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::N_VAR_EXPR | SyntaxKind::N_BIN_EXPR | SyntaxKind::N_INT_LIT_EXPR
        )
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        match syntax.kind() {
            SyntaxKind::N_VAR_EXPR => Some(Self::Var(VarExpr { syntax })),
            SyntaxKind::N_BIN_EXPR => Some(Self::Binary(BinExpr { syntax })),
            SyntaxKind::N_INT_LIT_EXPR => Some(Self::IntLit(IntLitExpr { syntax })),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Var(e) => &e.syntax,
            Self::Binary(e) => &e.syntax,
            Self::IntLit(e) => &e.syntax,
        }
    }
}

impl Expr {
    /// Source text covered by this expression.
    #[must_use]
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }

    /// Display the expression as a simple S-expression for tests.
    ///
    /// Missing operands render as `?`. Operands are visited with an explicit
    /// stack, so long left-leaning chains do not grow the call stack.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![SexprPiece::Expr(Some(self.clone()))];

        while let Some(piece) = stack.pop() {
            match piece {
                SexprPiece::Text(text) => out.push_str(text),
                SexprPiece::Expr(None) => out.push('?'),
                SexprPiece::Expr(Some(Self::Var(var))) => out.push_str(&var.var_name()),
                SexprPiece::Expr(Some(Self::IntLit(lit))) => out.push_str(&lit.digits()),
                SexprPiece::Expr(Some(Self::Binary(bin))) => {
                    out.push('(');
                    out.push_str(bin.op().map_or("?", BinaryOp::symbol));
                    out.push(' ');
                    stack.extend([
                        SexprPiece::Text(")"),
                        SexprPiece::Expr(bin.rhs()),
                        SexprPiece::Text(" "),
                        SexprPiece::Expr(bin.lhs()),
                    ]);
                }
            }
        }

        out
    }
}

/// Pending output while rendering an S-expression.
enum SexprPiece {
    Expr(Option<Expr>),
    Text(&'static str),
}

impl VarExpr {
    /// The referenced variable including its `$` sigil.
    #[must_use]
    pub fn var_name(&self) -> String {
        super::dollar_name(&self.syntax)
    }
}

impl BinExpr {
    /// Left operand.
    #[must_use]
    pub fn lhs(&self) -> Option<Expr> {
        child(&self.syntax)
    }

    /// Right operand, absent when the input ends after the operator.
    #[must_use]
    pub fn rhs(&self) -> Option<Expr> {
        children::<Expr>(&self.syntax).into_iter().nth(1)
    }

    /// The operator token.
    #[must_use]
    pub fn op_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(rowan::NodeOrToken::into_token)
            .find(|t| BinaryOp::from_kind(t.kind()).is_some())
    }

    /// The operator.
    #[must_use]
    pub fn op(&self) -> Option<BinaryOp> {
        self.op_token().and_then(|t| BinaryOp::from_kind(t.kind()))
    }
}

impl IntLitExpr {
    /// The literal's digits as written.
    #[must_use]
    pub fn digits(&self) -> String {
        first_token(&self.syntax, SyntaxKind::T_NUMBER)
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    /// The literal's value, `None` if it does not fit in a `u64`.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        self.digits().parse().ok()
    }
}
