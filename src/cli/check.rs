//! Run source text through the lexer, parser and printer

use super::{CliError, expr_to_json, tokens_to_json};
use crate::{Diagnostic, Lexer, Parser, Reporter, render};

/// Source used when nothing is given on the command line or stdin
pub const DEMO_SOURCE: &str = "3 + 4 * (2 - 1)";

/// Options for the parse command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Expression source text
    pub source: String,
    /// Emit the tree as JSON instead of the parenthesized form
    pub json: bool,
}

/// Result of a successful parse
#[derive(Debug)]
pub enum CheckResult {
    /// Canonical parenthesized rendering
    Rendered(String),
    /// Tree as nested JSON objects
    Json(serde_json::Value),
}

/// Lex, parse and render `options.source`.
///
/// Lexical diagnostics go to `reporter` as they are found. Parsing is still
/// attempted after lexical errors so that every problem is surfaced in one
/// run; the call fails if either stage reported anything.
pub fn execute_check<R: Reporter + ?Sized>(
    options: &CheckOptions,
    reporter: &mut R,
) -> Result<CheckResult, CliError> {
    let mut lex_errors: Vec<Diagnostic> = Vec::new();
    let tokens = Lexer::new(&options.source).scan_tokens(&mut lex_errors);
    let lex_error_count = lex_errors.len();
    for diagnostic in lex_errors {
        reporter.report(diagnostic);
    }

    let expr = Parser::new(tokens).parse().map_err(|e| {
        reporter.report(e.to_diagnostic());
        CliError::Parse(e)
    })?;

    if lex_error_count > 0 {
        return Err(CliError::Lex(lex_error_count));
    }

    if options.json {
        Ok(CheckResult::Json(expr_to_json(&expr)))
    } else {
        Ok(CheckResult::Rendered(render(&expr)))
    }
}

/// Lex `source` and return the token stream as JSON.
///
/// Lexical errors are reported but do not stop the dump.
pub fn execute_tokens<R: Reporter + ?Sized>(source: &str, reporter: &mut R) -> serde_json::Value {
    let tokens = Lexer::new(source).scan_tokens(reporter);
    tokens_to_json(&tokens)
}
