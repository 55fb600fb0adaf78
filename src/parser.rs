use std::fmt;

use crate::{
    ast::{Expr, LiteralValue, Literal, Token, TokenKind},
    diagnostics::{Diagnostic, Location},
};

/// The first syntax error found; parsing stops there.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub line: usize,
    pub location: Location,
    pub message: String,
}

impl ParseError {
    fn at(token: &Token, message: &str) -> Self {
        let location = match token.kind {
            TokenKind::Eof => Location::AtEnd,
            _ => Location::At(token.lexeme.clone()),
        };
        ParseError {
            line: token.line,
            location,
            message: message.to_string(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::syntax(self.line, self.location.clone(), self.message.clone())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser over a scanned token sequence.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::eof(line));
        }
        Parser { tokens, current: 0 }
    }

    /// Parses one expression.
    ///
    /// Tokens after a complete expression are left unconsumed. No partial
    /// tree escapes on failure.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        self.parse_expression()
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_equality()
    }

    fn peek(&self) -> &Token {
        // `new` guarantees a trailing EOF and `advance` never steps past it
        &self.tokens[self.current]
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token if it is one of `kinds`.
    fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.iter().any(|&kind| self.check(kind)) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::at(self.peek(), message))
        }
    }

    /// One left-associative precedence level: `next ( op next )*`.
    fn parse_left_assoc(
        &mut self,
        operators: &[TokenKind],
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;

        while let Some(operator) = self.match_any(operators) {
            let right = next(self)?;
            left = Expr::binary(left, operator, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::parse_comparison,
        )
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::parse_term,
        )
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&[TokenKind::Plus, TokenKind::Minus], Self::parse_factor)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&[TokenKind::Slash, TokenKind::Star], Self::parse_unary)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(operator) = self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let operand = self.parse_unary()?; // Right-recursive: `!!x`, `--x`
            return Ok(Expr::unary(operator, operand));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let value = match self.peek().kind {
            TokenKind::False => LiteralValue::Bool(false),
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::Nil => LiteralValue::Nil,
            TokenKind::Number | TokenKind::String => match self.advance().literal {
                Some(Literal::Number(n)) => return Ok(Expr::literal(LiteralValue::Number(n))),
                Some(Literal::String(s)) => return Ok(Expr::literal(LiteralValue::String(s))),
                // Hand-built token without a decoded value
                None => return Ok(Expr::literal(LiteralValue::Nil)),
            },
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(ParseError::at(self.peek(), "Expect expression.")),
        };

        self.advance();
        Ok(Expr::literal(value))
    }
}

/// Parses a token sequence into a single expression.
///
/// # Examples
///
/// ```
/// use lox_syntax::{lexer::scan, parser::parse, render};
///
/// let (tokens, _) = scan("1 - 2 - 3");
/// let expr = parse(tokens).unwrap();
/// assert_eq!(render(&expr), "(- (- 1 2) 3)");
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}
