//! Statements inside an action body.

use super::expressions;
use crate::SyntaxKind;
use crate::parser::Parser;

/// Parses one statement. Only assignments are recognised; any other leading
/// token means there is no statement here.
pub(super) fn stmt(p: &mut Parser<'_>) -> bool {
    match p.current() {
        Some(SyntaxKind::T_DOLLAR) => assign_stmt(p),
        _ => false,
    }
}

/// `$name = expr`
fn assign_stmt(p: &mut Parser<'_>) -> bool {
    if !p.at(SyntaxKind::T_DOLLAR) {
        return false;
    }
    let m = p.mark();
    p.advance();
    p.eat(SyntaxKind::T_IDENT);
    if p.eat(SyntaxKind::T_EQ) {
        expressions::expr(p);
    }
    let _ = m.done(p, SyntaxKind::N_ASSIGN_STMT);
    true
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use crate::parser::ast::Stmt;

    fn stmt_texts(src: &str) -> Vec<String> {
        parse(src)
            .root()
            .action_decls()
            .iter()
            .flat_map(|a| a.stmts())
            .map(|s| s.text())
            .collect()
    }

    #[test]
    fn statements_with_and_without_semicolons() {
        assert_eq!(
            stmt_texts("action a { $x=1; $y=2 $z=3 }"),
            vec!["$x=1", "$y=2 ", "$z=3 "]
        );
    }

    #[test]
    fn assignment_without_value() {
        let parsed = parse("action a { $x = }");
        let stmts: Vec<Stmt> = parsed
            .root()
            .action_decls()
            .iter()
            .flat_map(|a| a.stmts())
            .collect();
        assert_eq!(stmts.len(), 1);
        let Some(Stmt::Assign(assign)) = stmts.first() else {
            panic!("expected an assignment");
        };
        assert_eq!(assign.target(), Some("$x".to_string()));
        assert!(assign.expr().is_none());
    }

    #[test]
    fn unknown_statement_ends_the_body() {
        let src = "action a { foo; $x = 1 }";
        let parsed = parse(src);
        let action = parsed.root().action_decls();
        assert!(action.iter().all(|a| a.stmts().is_empty()));
        assert_eq!(parsed.root().text(), src);
    }
}
