//! # Lox Expressions - Abstract Syntax Tree
//!
//! This module defines the tokens produced by the lexer and the expression
//! tree built by the parser.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Token categories, decoded literals and the token record
//! - **[expressions]** - Expression nodes (binary, unary, grouping, literal)
//! - **[visitor]** - The traversal contract used by tree consumers
//!
//! ## Grammar
//!
//! From lowest to highest precedence, all binary operators left-associative:
//!
//! ```text
//! expression → equality
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "+" | "-" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | primary
//! primary    → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
//! ```
//!
//! ## Example
//!
//! ```text
//! 3 + 4 * (2 - 1)
//! ```
//!
//! parses to a `Binary(+)` whose right operand is a `Binary(*)` holding a
//! `Grouping`, and renders as `(+ 3 (* 4 (group (- 2 1))))`.
pub mod expressions;
pub mod tokens;
pub mod visitor;

pub use expressions::{Expr, LiteralValue};
pub use tokens::{Literal, Token, TokenKind};
pub use visitor::Visitor;
