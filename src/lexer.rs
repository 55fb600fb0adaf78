use crate::{
    ast::{Literal, Token, TokenKind},
    diagnostics::{Diagnostic, Reporter},
};

/// Single-pass scanner turning source text into tokens.
///
/// Lexical errors are reported and skipped, so one pass can surface several
/// of them; the returned sequence always ends with exactly one `EOF` token.
pub struct Lexer {
    input: Vec<char>,
    start: usize,
    position: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            start: 0,
            position: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole input.
    pub fn scan_tokens<R: Reporter + ?Sized>(mut self, reporter: &mut R) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.position;
            self.scan_token(reporter);
        }

        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.position += 1;
        Some(ch)
    }

    /// Consumes the next character only if it is `expected`.
    fn advance_if(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> String {
        self.input[self.start..self.position].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme();
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    fn scan_token<R: Reporter + ?Sized>(&mut self, reporter: &mut R) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.advance_if('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.advance_if('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.advance_if('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.advance_if('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.advance_if('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,
            '"' => self.read_string(reporter),
            c if c.is_ascii_digit() => self.read_number(),
            c if is_alpha(c) => self.read_identifier(),
            c => reporter.report(Diagnostic::lexical(
                self.line,
                format!("Unexpected character '{}'.", c),
            )),
        }
    }

    /// Skips to the end of the line; the newline itself is left for
    /// `scan_token` so the line counter stays in one place.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn read_string<R: Reporter + ?Sized>(&mut self, reporter: &mut R) {
        while let Some(ch) = self.current_char() {
            if ch == '"' {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            reporter.report(Diagnostic::lexical(self.line, "Unterminated string."));
            return;
        }

        self.advance(); // Closing quote

        let value: String = self.input[self.start + 1..self.position - 1]
            .iter()
            .collect();
        self.add_literal_token(TokenKind::String, Some(Literal::String(value)));
    }

    fn read_number(&mut self) {
        self.skip_digits();

        // A trailing '.' without a digit after it is left for the next token
        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            self.skip_digits();
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, Some(Literal::Number(value))),
            Err(_) => unreachable!("digit run {:?} is always a valid float", text),
        }
    }

    fn skip_digits(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn read_identifier(&mut self) {
        while self.current_char().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let text = self.lexeme();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);
        self.tokens.push(Token::new(kind, text, None, self.line));
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

/// Scans `source` and collects every lexical diagnostic.
///
/// # Examples
///
/// ```
/// use lox_syntax::{lexer::scan, TokenKind};
///
/// let (tokens, diagnostics) = scan("1 != 2");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Number, TokenKind::BangEqual, TokenKind::Number, TokenKind::Eof]
/// );
/// assert!(diagnostics.is_empty());
/// ```
pub fn scan(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let tokens = Lexer::new(source).scan_tokens(&mut diagnostics);
    (tokens, diagnostics)
}
