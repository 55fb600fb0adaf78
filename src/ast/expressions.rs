use std::fmt;

use crate::ast::{Token, Visitor};

/// Value held by a [`Expr::Literal`] node.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Bool(bool),
    Number(f64),
    String(String),
    /// The absent value, written `nil`
    Nil,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Bool(b) => write!(f, "{}", b),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::String(s) => f.write_str(s),
            LiteralValue::Nil => f.write_str("nil"),
        }
    }
}

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Every node exclusively owns its children, so the tree has no sharing and
/// no cycles. Dropping the root frees the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Infix operation
    ///
    /// # Examples
    /// ```text
    /// 1 + 2
    /// a >= b
    /// ```
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// Parenthesized expression, kept as its own node
    ///
    /// # Example
    /// ```text
    /// (1 + 2)
    /// ```
    Grouping(Box<Expr>),

    /// Prefix `-` or `!`
    Unary {
        operator: Token,
        operand: Box<Expr>,
    },

    /// Leaf value
    Literal(LiteralValue),
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token, operand: Expr) -> Self {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn literal(value: LiteralValue) -> Self {
        Expr::Literal(value)
    }

    /// Dispatches to the visitor method matching this node's variant.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Grouping(inner) => visitor.visit_grouping(inner),
            Expr::Unary { operator, operand } => visitor.visit_unary(operator, operand),
            Expr::Literal(value) => visitor.visit_literal(value),
        }
    }
}
