//! Canonical fully-parenthesized rendering of expression trees.
//!
//! Every operator node prints as `(<lexeme> <operands...>)`, groupings as
//! `(group <inner>)`, and literals as their plain text (`nil` for the absent
//! value, strings without quotes). The output depends only on tree shape, not
//! on the spacing of the original source.
//!
//! # Examples
//!
//! ```
//! use lox_syntax::{lexer::scan, parser::parse, printer::render};
//!
//! let (tokens, _) = scan("3 + 4 * (2 - 1)");
//! let expr = parse(tokens).unwrap();
//! assert_eq!(render(&expr), "(+ 3 (* 4 (group (- 2 1))))");
//! ```

use crate::ast::{Expr, LiteralValue, Token, Visitor};

#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut result = format!("({}", name);
        for expr in exprs {
            result.push(' ');
            result.push_str(&expr.accept(self));
        }
        result.push(')');
        result
    }
}

impl Visitor for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[operand])
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }
}

/// Renders `expr` in the canonical parenthesized form.
pub fn render(expr: &Expr) -> String {
    AstPrinter::new().print(expr)
}
