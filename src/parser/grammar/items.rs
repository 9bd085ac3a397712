//! Directives, declarations and parameters.

use super::statements;
use crate::SyntaxKind;
use crate::parser::Parser;

/// `database name ;`
pub(super) fn db_directive(p: &mut Parser<'_>) -> bool {
    directive(p, SyntaxKind::K_DATABASE, SyntaxKind::N_DB_DIRECTIVE)
}

/// `use name ;`
pub(super) fn ext_directive(p: &mut Parser<'_>) -> bool {
    directive(p, SyntaxKind::K_USE, SyntaxKind::N_EXT_DIRECTIVE)
}

fn directive(p: &mut Parser<'_>, keyword: SyntaxKind, node: SyntaxKind) -> bool {
    if !p.at(keyword) {
        return false;
    }
    let m = p.mark();
    p.advance();
    p.eat(SyntaxKind::T_IDENT);
    p.eat(SyntaxKind::T_SEMI);
    let _ = m.done(p, node);
    true
}

pub(super) fn declaration(p: &mut Parser<'_>) -> bool {
    match p.current() {
        Some(SyntaxKind::K_TABLE) => table_decl(p),
        Some(SyntaxKind::K_ACTION) => action_decl(p),
        _ => false,
    }
}

/// `table name { }`
///
/// Table bodies beyond the brace pair are not modelled.
fn table_decl(p: &mut Parser<'_>) -> bool {
    if !p.at(SyntaxKind::K_TABLE) {
        return false;
    }
    let m = p.mark();
    p.advance();
    p.eat(SyntaxKind::T_IDENT);
    p.eat(SyntaxKind::T_LBRACE);
    p.eat(SyntaxKind::T_RBRACE);
    let _ = m.done(p, SyntaxKind::N_TABLE_DECL);
    true
}

/// `action name ( $a, $b ) { stmt; ... }`
fn action_decl(p: &mut Parser<'_>) -> bool {
    if !p.at(SyntaxKind::K_ACTION) {
        return false;
    }
    let m = p.mark();
    p.advance();
    p.eat(SyntaxKind::T_IDENT);
    p.eat(SyntaxKind::T_LPAREN);
    while param_decl(p) {
        p.eat(SyntaxKind::T_COMMA);
    }
    p.eat(SyntaxKind::T_RPAREN);
    p.eat(SyntaxKind::T_LBRACE);
    while statements::stmt(p) {
        p.eat(SyntaxKind::T_SEMI);
    }
    p.eat(SyntaxKind::T_RBRACE);
    let _ = m.done(p, SyntaxKind::N_ACTION_DECL);
    true
}

/// `$name`
fn param_decl(p: &mut Parser<'_>) -> bool {
    if !p.at(SyntaxKind::T_DOLLAR) {
        return false;
    }
    let m = p.mark();
    p.advance();
    p.eat(SyntaxKind::T_IDENT);
    let _ = m.done(p, SyntaxKind::N_PARAM_DECL);
    true
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use crate::syntax_utils::dump_tree;
    use rstest::rstest;

    #[rstest]
    #[case("database", 1)]
    #[case("database ;", 1)]
    #[case("database abc", 1)]
    #[case("database abc;", 1)]
    #[case("use", 0)]
    fn db_directive_pieces_are_optional(#[case] src: &str, #[case] expected: usize) {
        let parsed = parse(src);
        assert_eq!(usize::from(parsed.root().db_directive().is_some()), expected);
        assert_eq!(parsed.root().text(), src);
    }

    #[test]
    fn table_without_braces() {
        let parsed = parse("table t table u {}");
        let names: Vec<Option<String>> =
            parsed.root().table_decls().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec![Some("t".into()), Some("u".into())]);
    }

    #[test]
    fn action_tree_shape() {
        let parsed = parse("action f($a){$a=1;}");
        assert_eq!(
            dump_tree(parsed.syntax()),
            concat!(
                "N_SOURCE_FILE\n",
                "  N_ACTION_DECL\n",
                "    K_ACTION \"action\"\n",
                "    T_WHITESPACE \" \"\n",
                "    T_IDENT \"f\"\n",
                "    T_LPAREN \"(\"\n",
                "    N_PARAM_DECL\n",
                "      T_DOLLAR \"$\"\n",
                "      T_IDENT \"a\"\n",
                "    T_RPAREN \")\"\n",
                "    T_LBRACE \"{\"\n",
                "    N_ASSIGN_STMT\n",
                "      T_DOLLAR \"$\"\n",
                "      T_IDENT \"a\"\n",
                "      T_EQ \"=\"\n",
                "      N_INT_LIT_EXPR\n",
                "        T_NUMBER \"1\"\n",
                "    T_SEMI \";\"\n",
                "    T_RBRACE \"}\"\n",
            )
        );
    }

    #[test]
    fn parameters_without_commas_or_parens() {
        let parsed = parse("action f $a $b");
        let actions = parsed.root().action_decls();
        let names: Vec<String> = actions
            .iter()
            .flat_map(|a| a.params())
            .map(|p| p.name())
            .collect();
        assert_eq!(names, vec!["$a", "$b"]);
    }
}
