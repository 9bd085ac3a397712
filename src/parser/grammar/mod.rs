//! Grammar rules.
//!
//! A predictive recursive-descent layer over the marker engine. Each rule
//! checks the current token against the first token of its construct and
//! returns without consuming anything when it does not match. Once a rule has
//! committed, every later piece is optional: a missing token is simply not
//! consumed and the node comes out short. No rule reports errors.

mod expressions;
mod items;
mod statements;

use super::Parser;

/// File: an optional `database` directive, then `use` directives, then
/// table and action declarations, in that order.
///
/// Tokens after the last recognised construct are left unclaimed; the CST
/// builder attaches them to the root.
pub(crate) fn source_file(p: &mut Parser<'_>) {
    items::db_directive(p);
    while items::ext_directive(p) {}
    while items::declaration(p) {}
}
