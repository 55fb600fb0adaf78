//! CLI support for lox-syntax
//!
//! Provides programmatic access to the `loxs` pipeline so other tools can
//! embed it without going through the binary.

mod check;
mod convert;

pub use check::{CheckOptions, CheckResult, DEMO_SOURCE, execute_check, execute_tokens};
pub use convert::{diagnostic_to_json, expr_to_json, token_to_json, tokens_to_json};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// One or more lexical errors (already sent to the reporter)
    Lex(usize),
    /// Parser error
    Parse(crate::ParseError),
    /// JSON serialization error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Lex(1) => write!(f, "Scanning failed with 1 error"),
            CliError::Lex(n) => write!(f, "Scanning failed with {} errors", n),
            CliError::Parse(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Lex(_) => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
