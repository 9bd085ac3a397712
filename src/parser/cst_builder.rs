//! Build a `rowan` green tree from tokens and recorded markers.
//!
//! The builder walks the marker event list once. An open event first flushes
//! every unclaimed token before the marker's start into the enclosing node,
//! then starts a node of the marker's kind. A close event flushes the tokens
//! through the marker's end into that node and finishes it. Abandoned markers
//! are skipped. Tokens left over after the last event are appended to the
//! root, so the tree always covers the whole input.

use log::trace;
use rowan::{GreenNode, GreenNodeBuilder, Language};

use super::marker::{MarkerId, Markers};
use crate::{KuneiformLanguage, SyntaxKind, Token};

/// Inconsistencies in the marker list detected while building the tree.
///
/// These never stem from the input text; they mean a grammar rule misused
/// the marker engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum BuildError {
    #[error("event {event} refers to unknown marker {marker}")]
    UnknownMarker { marker: usize, event: usize },
    #[error("marker {marker} was neither completed nor abandoned")]
    Unfinished { marker: usize },
    #[error("marker {marker} closed while {open:?} was the innermost open marker")]
    MismatchedClose { marker: usize, open: Option<usize> },
    #[error("event {event} is neither the start nor the end of marker {marker}")]
    StrayEvent { marker: usize, event: usize },
    #[error("{count} marker(s) still open after the last event")]
    Unclosed { count: usize },
}

fn push_tokens(
    builder: &mut GreenNodeBuilder<'_>,
    tokens: &[Token<'_>],
    next: &mut usize,
    limit: usize,
) {
    while *next < limit {
        let Some(token) = tokens.get(*next) else {
            break;
        };
        builder.token(KuneiformLanguage::kind_to_raw(token.kind), token.text);
        *next += 1;
    }
}

/// Construct the CST from the token sequence and the recorded markers.
///
/// # Errors
/// Returns a [`BuildError`] if the markers are not properly nested or a
/// marker was left open.
pub(crate) fn build_green_tree(
    tokens: &[Token<'_>],
    markers: &Markers,
) -> Result<GreenNode, BuildError> {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(KuneiformLanguage::kind_to_raw(SyntaxKind::N_SOURCE_FILE));

    let mut open: Vec<MarkerId> = Vec::new();
    let mut next = 0;

    for (event, &id) in markers.events().iter().enumerate() {
        let slot = markers.slot(id).ok_or(BuildError::UnknownMarker {
            marker: id.index(),
            event,
        })?;
        if slot.abandoned {
            continue;
        }
        let kind = slot.kind.ok_or(BuildError::Unfinished { marker: id.index() })?;

        if event == slot.start_event {
            push_tokens(&mut builder, tokens, &mut next, slot.start_pos);
            trace!("start {kind:?} at token {next}");
            builder.start_node(KuneiformLanguage::kind_to_raw(kind));
            open.push(id);
        } else if slot.end_event == Some(event) {
            let innermost = open.last().copied();
            if innermost != Some(id) {
                return Err(BuildError::MismatchedClose {
                    marker: id.index(),
                    open: innermost.map(MarkerId::index),
                });
            }
            push_tokens(&mut builder, tokens, &mut next, slot.end_pos);
            trace!("finish {kind:?} at token {next}");
            builder.finish_node();
            open.pop();
        } else {
            return Err(BuildError::StrayEvent {
                marker: id.index(),
                event,
            });
        }
    }

    if !open.is_empty() {
        return Err(BuildError::Unclosed { count: open.len() });
    }

    push_tokens(&mut builder, tokens, &mut next, tokens.len());
    builder.finish_node();
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::syntax_utils::dump_tree;
    use crate::{SyntaxNode, tokenize};

    fn tree(p: Parser<'_>) -> SyntaxNode {
        match p.finish() {
            Ok(green) => SyntaxNode::new_root(green),
            Err(err) => panic!("unexpected build error: {err}"),
        }
    }

    #[test]
    fn no_markers_wraps_all_tokens_in_root() {
        let src = "  garbage ! here ";
        let root = tree(Parser::new(tokenize(src)));
        assert_eq!(root.kind(), SyntaxKind::N_SOURCE_FILE);
        assert_eq!(root.text().to_string(), src);
        assert_eq!(root.children().count(), 0);
    }

    #[test]
    fn trailing_tokens_are_kept() {
        let src = "use a; 1 2";
        let mut p = Parser::new(tokenize(src));
        let m = p.mark();
        p.advance();
        let _ = m.done(&mut p, SyntaxKind::N_EXT_DIRECTIVE);
        let root = tree(p);
        assert_eq!(root.text().to_string(), src);
        assert_eq!(
            dump_tree(&root),
            concat!(
                "N_SOURCE_FILE\n",
                "  N_EXT_DIRECTIVE\n",
                "    K_USE \"use\"\n",
                "    T_WHITESPACE \" \"\n",
                "  T_IDENT \"a\"\n",
                "  T_SEMI \";\"\n",
                "  T_WHITESPACE \" \"\n",
                "  T_NUMBER \"1\"\n",
                "  T_WHITESPACE \" \"\n",
                "  T_NUMBER \"2\"\n",
            )
        );
    }

    #[test]
    fn preceded_marker_wraps_completed_node() {
        let mut p = Parser::new(tokenize("1+2"));
        let lhs = p.mark();
        p.advance();
        let wrapper = lhs.done(&mut p, SyntaxKind::N_INT_LIT_EXPR).precede(&mut p);
        p.advance();
        let rhs = p.mark();
        p.advance();
        let _ = rhs.done(&mut p, SyntaxKind::N_INT_LIT_EXPR);
        let _ = wrapper.done(&mut p, SyntaxKind::N_BIN_EXPR);
        let root = tree(p);
        assert_eq!(
            dump_tree(&root),
            concat!(
                "N_SOURCE_FILE\n",
                "  N_BIN_EXPR\n",
                "    N_INT_LIT_EXPR\n",
                "      T_NUMBER \"1\"\n",
                "    T_PLUS \"+\"\n",
                "    N_INT_LIT_EXPR\n",
                "      T_NUMBER \"2\"\n",
            )
        );
    }

    #[test]
    fn rolled_back_attempt_leaves_no_trace() {
        let src = "$a b";
        let mut p = Parser::new(tokenize(src));
        let attempt = p.mark();
        p.advance();
        p.advance();
        let _ = p.mark().done(&mut p, SyntaxKind::N_VAR_EXPR);
        attempt.rollback(&mut p);
        let root = tree(p);
        assert_eq!(root.children().count(), 0);
        assert_eq!(root.text().to_string(), src);
    }

    #[test]
    fn crossed_markers_are_rejected() {
        let mut p = Parser::new(tokenize("a b"));
        let outer = p.mark();
        let inner = p.mark();
        p.advance();
        let _ = outer.done(&mut p, SyntaxKind::N_TABLE_DECL);
        let _ = inner.done(&mut p, SyntaxKind::N_VAR_EXPR);
        assert_eq!(
            p.finish(),
            Err(BuildError::MismatchedClose {
                marker: 0,
                open: Some(1),
            })
        );
    }

    #[test]
    fn open_marker_is_rejected() {
        let mut p = Parser::new(tokenize("a"));
        let _pending = p.mark();
        assert_eq!(p.finish(), Err(BuildError::Unfinished { marker: 0 }));
    }

    #[test]
    fn close_event_lost_to_rollback_is_rejected() {
        let mut p = Parser::new(tokenize("a b"));
        let completed = p.mark();
        let attempt = p.mark();
        p.advance();
        let _ = completed.done(&mut p, SyntaxKind::N_TABLE_DECL);
        attempt.rollback(&mut p);
        assert_eq!(p.finish(), Err(BuildError::Unclosed { count: 1 }));
    }

    #[test]
    fn errors_describe_the_defect() {
        let err = BuildError::MismatchedClose {
            marker: 3,
            open: Some(4),
        };
        assert_eq!(
            err.to_string(),
            "marker 3 closed while Some(4) was the innermost open marker"
        );
    }
}
