//! JSON views of tokens, trees and diagnostics

use serde_json::{Map, Value, json};

use crate::{
    ast::{Expr, Literal, LiteralValue, Token, Visitor},
    diagnostics::{Diagnostic, DiagnosticKind},
};

fn literal_to_json(literal: &Option<Literal>) -> Value {
    match literal {
        None => Value::Null,
        Some(Literal::String(s)) => Value::String(s.clone()),
        Some(Literal::Number(n)) => number_to_json(*n),
    }
}

/// Non-finite floats have no JSON form and become `null`
fn number_to_json(n: f64) -> Value {
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Convert one token to `{"kind", "lexeme", "literal", "line"}`
pub fn token_to_json(token: &Token) -> Value {
    json!({
        "kind": token.kind.name(),
        "lexeme": token.lexeme,
        "literal": literal_to_json(&token.literal),
        "line": token.line,
    })
}

/// Convert a token stream to a JSON array
pub fn tokens_to_json(tokens: &[Token]) -> Value {
    Value::Array(tokens.iter().map(token_to_json).collect())
}

/// Convert a diagnostic to `{"kind", "line", "message", "rendered"}`
pub fn diagnostic_to_json(diagnostic: &Diagnostic) -> Value {
    let kind = match diagnostic.kind {
        DiagnosticKind::Lexical => "lexical",
        DiagnosticKind::Syntax => "syntax",
    };
    json!({
        "kind": kind,
        "line": diagnostic.line,
        "message": diagnostic.message,
        "rendered": diagnostic.to_string(),
    })
}

struct JsonBuilder;

impl JsonBuilder {
    fn node(kind: &str, fields: Vec<(&str, Value)>) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(kind.to_string()));
        for (key, value) in fields {
            map.insert(key.to_string(), value);
        }
        Value::Object(map)
    }
}

impl Visitor for JsonBuilder {
    type Output = Value;

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Value {
        Self::node(
            "binary",
            vec![
                ("operator", Value::String(operator.lexeme.clone())),
                ("left", left.accept(self)),
                ("right", right.accept(self)),
            ],
        )
    }

    fn visit_grouping(&mut self, inner: &Expr) -> Value {
        Self::node("grouping", vec![("expression", inner.accept(self))])
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> Value {
        Self::node(
            "unary",
            vec![
                ("operator", Value::String(operator.lexeme.clone())),
                ("operand", operand.accept(self)),
            ],
        )
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> Value {
        let value = match value {
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Number(n) => number_to_json(*n),
            LiteralValue::String(s) => Value::String(s.clone()),
            LiteralValue::Nil => Value::Null,
        };
        Self::node("literal", vec![("value", value)])
    }
}

/// Convert an expression tree to nested JSON objects tagged by `"type"`
pub fn expr_to_json(expr: &Expr) -> Value {
    expr.accept(&mut JsonBuilder)
}
