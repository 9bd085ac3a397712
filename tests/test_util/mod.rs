//! Shared test utilities for integration tests.
//!
//! These helpers tokenise and parse fixtures and pull out the nodes the tests
//! assert over, keeping individual test bodies short.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use kuneiform_cst::{
    SyntaxElement, SyntaxKind, SyntaxNode,
    ast::{ActionDecl, Expr},
    parse, tokenize,
};

/// Kinds of every token in `src`, trivia included.
#[must_use]
pub fn kinds(src: &str) -> Vec<SyntaxKind> {
    tokenize(src).iter().map(|t| t.kind).collect()
}

/// Texts of every token in `src`, trivia included.
#[must_use]
pub fn texts(src: &str) -> Vec<String> {
    tokenize(src).iter().map(|t| t.text.to_string()).collect()
}

/// The first action declared in `src`.
///
/// # Panics
/// Panics if `src` declares no action.
#[must_use]
pub fn first_action(src: &str) -> ActionDecl {
    let parsed = parse(src);
    let Some(action) = parsed.root().action_decls().into_iter().next() else {
        panic!("no action declared in {src:?}");
    };
    action
}

/// Parse `src` as the right-hand side of an assignment inside an action.
///
/// # Panics
/// Panics if no expression was recognised.
#[must_use]
pub fn build_expr(src: &str) -> Expr {
    let action = first_action(&format!("action a(){{$x={src};}}"));
    let expr = action
        .stmts()
        .into_iter()
        .find_map(|s| s.as_assign().and_then(|a| a.expr()));
    let Some(expr) = expr else {
        panic!("no expression recognised in {src:?}");
    };
    expr
}

/// Collect the text of a syntax subtree.
///
/// This helper iteratively traverses the tree using an explicit stack so
/// deeply nested inputs do not risk recursion overflow.
#[must_use]
pub fn pretty_print(node: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut stack = vec![SyntaxElement::Node(node.clone())];

    while let Some(item) = stack.pop() {
        match item {
            SyntaxElement::Token(t) => out.push_str(t.text()),
            SyntaxElement::Node(n) => {
                let children: Vec<SyntaxElement> = n.children_with_tokens().collect();
                for child in children.into_iter().rev() {
                    stack.push(child);
                }
            }
        }
    }

    out
}

/// Every leaf token of the tree in document order.
#[must_use]
pub fn leaf_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.descendants_with_tokens()
        .filter_map(SyntaxElement::into_token)
        .map(|t| t.kind())
        .collect()
}
