//! Utilities for traversing the syntax tree.
//!
//! These helpers work on `rowan` syntax elements without constructing
//! additional nodes. They are shared by the AST wrappers when extracting text
//! from the CST.

use rowan::{NodeOrToken, WalkEvent};

use crate::{SyntaxKind, SyntaxNode, SyntaxToken};

/// First direct child token of `node` with the given kind.
///
/// Only the node's own children are inspected; tokens inside nested nodes
/// are not considered.
#[must_use]
pub fn first_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(NodeOrToken::into_token)
        .find(|t| t.kind() == kind)
}

/// Text of the first direct identifier token of `node`.
#[must_use]
pub fn ident_text(node: &SyntaxNode) -> Option<String> {
    first_token(node, SyntaxKind::T_IDENT).map(|t| t.text().to_string())
}

/// Render the subtree rooted at `node` as an indented outline.
///
/// Nodes print their kind; tokens print their kind and quoted text. Each
/// level of nesting indents by two spaces.
///
/// # Examples
///
/// ```rust
/// use kuneiform_cst::{parse, syntax_utils::dump_tree};
///
/// let parsed = parse("use x;");
/// let dump = dump_tree(parsed.syntax());
/// assert!(dump.starts_with("N_SOURCE_FILE\n  N_EXT_DIRECTIVE\n"));
/// ```
#[must_use]
pub fn dump_tree(node: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for event in node.preorder_with_tokens() {
        match event {
            WalkEvent::Enter(element) => {
                out.push_str(&"  ".repeat(depth));
                match element {
                    NodeOrToken::Node(n) => {
                        out.push_str(&format!("{:?}\n", n.kind()));
                        depth += 1;
                    }
                    NodeOrToken::Token(t) => {
                        out.push_str(&format!("{:?} {:?}\n", t.kind(), t.text()));
                    }
                }
            }
            WalkEvent::Leave(NodeOrToken::Node(_)) => depth = depth.saturating_sub(1),
            WalkEvent::Leave(NodeOrToken::Token(_)) => {}
        }
    }
    out
}
