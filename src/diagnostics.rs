//! Error reporting side channel shared by the lexer and the parser.
//!
//! Diagnostics never travel inside the token stream or the tree. The lexer
//! pushes them into a caller-supplied [`Reporter`]; the parser returns a
//! [`ParseError`](crate::ParseError) that converts into one.

use std::fmt;

/// Which stage produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Unterminated string or unrecognized character
    Lexical,
    /// Token sequence does not match the expression grammar
    Syntax,
}

/// Where on its line a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// No token to point at (lexical errors)
    Unspecified,
    /// The offending token is `EOF`
    AtEnd,
    /// The offending token's lexeme
    At(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unspecified => Ok(()),
            Location::AtEnd => f.write_str(" at end"),
            Location::At(lexeme) => write!(f, " at '{}'", lexeme),
        }
    }
}

/// A `(line, message)` pair plus enough context to print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn lexical(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Lexical,
            line,
            location: Location::Unspecified,
            message: message.into(),
        }
    }

    pub fn syntax(line: usize, location: Location, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Syntax,
            line,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Sink that receives diagnostics as they are found.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Writes every diagnostic to stderr as soon as it arrives.
#[derive(Debug, Default)]
pub struct StderrReporter {
    had_error: bool,
}

impl StderrReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }
}

impl Reporter for StderrReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.had_error = true;
        eprintln!("{}", diagnostic);
    }
}
