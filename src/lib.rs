pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod printer;

pub use ast::{Expr, Literal, LiteralValue, Token, TokenKind, Visitor};
pub use diagnostics::{Diagnostic, DiagnosticKind, Location, Reporter, StderrReporter};
pub use lexer::{Lexer, scan};
pub use parser::{ParseError, Parser, parse};
pub use printer::{AstPrinter, render};
