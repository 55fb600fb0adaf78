// tests/lexer_tests.rs

use lox_syntax::ast::{Literal, Token, TokenKind};
use lox_syntax::diagnostics::{Diagnostic, DiagnosticKind, Location};
use lox_syntax::lexer::{Lexer, scan};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, diagnostics) = scan(source);
    assert!(
        diagnostics.is_empty(),
        "Unexpected diagnostics for input {:?}: {:?}",
        source,
        diagnostics
    );
    tokens.into_iter().map(|t| t.kind).collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", TokenKind::LeftParen),
        (")", TokenKind::RightParen),
        ("{", TokenKind::LeftBrace),
        ("}", TokenKind::RightBrace),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("-", TokenKind::Minus),
        ("+", TokenKind::Plus),
        (";", TokenKind::Semicolon),
        ("/", TokenKind::Slash),
        ("*", TokenKind::Star),
        ("!", TokenKind::Bang),
        ("=", TokenKind::Equal),
        ("<", TokenKind::Less),
        (">", TokenKind::Greater),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            kinds(input),
            vec![expected, TokenKind::Eof],
            "Failed for input: {}",
            input
        );
    }
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("!=", TokenKind::BangEqual),
        ("==", TokenKind::EqualEqual),
        ("<=", TokenKind::LessEqual),
        (">=", TokenKind::GreaterEqual),
    ];

    for (input, expected) in test_cases {
        let (tokens, _) = scan(input);
        assert_eq!(tokens.len(), 2, "Failed for input: {}", input);
        assert_eq!(tokens[0].kind, expected, "Failed for input: {}", input);
        assert_eq!(tokens[0].lexeme, input);
    }
}

#[test]
fn test_two_char_vs_single_char() {
    assert_eq!(
        kinds("! ="),
        vec![TokenKind::Bang, TokenKind::Equal, TokenKind::Eof]
    );
    assert_eq!(
        kinds("==="),
        vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]
    );
    assert_eq!(
        kinds("<<="),
        vec![TokenKind::Less, TokenKind::LessEqual, TokenKind::Eof]
    );
    assert_eq!(
        kinds("!!="),
        vec![TokenKind::Bang, TokenKind::BangEqual, TokenKind::Eof]
    );
}

// ============================================================================
// Keywords and Identifiers
// ============================================================================

#[test]
fn test_keywords() {
    let test_cases = vec![
        ("and", TokenKind::And),
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("false", TokenKind::False),
        ("fun", TokenKind::Fun),
        ("for", TokenKind::For),
        ("if", TokenKind::If),
        ("nil", TokenKind::Nil),
        ("or", TokenKind::Or),
        ("print", TokenKind::Print),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("this", TokenKind::This),
        ("true", TokenKind::True),
        ("var", TokenKind::Var),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            kinds(input),
            vec![expected, TokenKind::Eof],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_keywords_vs_identifiers() {
    // Keywords only match as whole words, and case-sensitively
    let test_cases = vec!["android", "and_item", "_and", "order", "truth", "nil2", "Nil", "TRUE", "classy"];

    for input in test_cases {
        let (tokens, _) = scan(input);
        assert_eq!(
            tokens[0].kind,
            TokenKind::Identifier,
            "Failed for input: {}",
            input
        );
        assert_eq!(tokens[0].lexeme, input);
        assert_eq!(tokens[0].literal, None);
    }
}

#[test]
fn test_identifiers() {
    let test_cases = vec!["x", "foo", "bar123", "snake_case", "camelCase", "_private", "__dunder__"];

    for input in test_cases {
        let (tokens, _) = scan(input);
        assert_eq!(tokens.len(), 2, "Failed for input: {}", input);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, input);
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec![
        ("0", 0.0),
        ("42", 42.0),
        ("007", 7.0),
        ("3.14", 3.14),
        ("123.456", 123.456),
        ("0.1", 0.1),
    ];

    for (input, expected) in test_cases {
        let (tokens, _) = scan(input);
        assert_eq!(tokens.len(), 2, "Failed for input: {}", input);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, input);
        match &tokens[0].literal {
            Some(Literal::Number(n)) => {
                assert_eq!(*n, expected, "Failed for input: {}", input);
            }
            other => panic!("Expected number literal, got {:?} for input: {}", other, input),
        }
    }
}

#[test]
fn test_trailing_dot_is_separate_token() {
    let (tokens, _) = scan("123.");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
    assert_eq!(tokens[1].kind, TokenKind::Dot);

    // Method-call-like syntax
    assert_eq!(
        kinds("12.abs"),
        vec![
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_leading_dot_is_separate_token() {
    let (tokens, _) = scan(".5");
    assert_eq!(tokens[0].kind, TokenKind::Dot);
    assert_eq!(tokens[1].literal, Some(Literal::Number(5.0)));
}

#[test]
fn test_only_one_fraction_part() {
    let (tokens, _) = scan("1.2.3");
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["1.2", ".", "3", ""]);
}

#[test]
fn test_negative_number_is_minus_then_number() {
    assert_eq!(
        kinds("-1"),
        vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_strings() {
    let test_cases = vec![
        ("\"hello\"", "hello"),
        ("\"\"", ""),
        ("\"with spaces\"", "with spaces"),
        ("\"no \\escapes\"", "no \\escapes"),
        ("\"héllo wörld\"", "héllo wörld"),
        ("\"// not a comment\"", "// not a comment"),
    ];

    for (input, expected) in test_cases {
        let (tokens, diagnostics) = scan(input);
        assert!(diagnostics.is_empty(), "Failed for input: {}", input);
        assert_eq!(tokens.len(), 2, "Failed for input: {}", input);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, input);
        assert_eq!(
            tokens[0].literal,
            Some(Literal::String(expected.to_string())),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_multiline_string_counts_lines() {
    let (tokens, _) = scan("\"one\ntwo\" 3");
    assert_eq!(
        tokens[0].literal,
        Some(Literal::String("one\ntwo".to_string()))
    );
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].line, 2);
}

// ============================================================================
// Whitespace, Comments and Lines
// ============================================================================

#[test]
fn test_whitespace_ignored() {
    assert_eq!(
        kinds(" \t\r1\t+\r\n 2 "),
        vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn test_line_comments() {
    assert_eq!(kinds("// only a comment"), vec![TokenKind::Eof]);
    assert_eq!(
        kinds("1 // trailing\n/ 2"),
        vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn test_line_numbers() {
    let (tokens, _) = scan("1\n2\n\n3");
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn test_eof_is_always_last_and_unique() {
    for input in ["", "1 + 2", "\"open", "@", "// comment"] {
        let (tokens, _) = scan(input);
        let last = tokens.last().expect("token stream is never empty");
        assert_eq!(last.kind, TokenKind::Eof, "Failed for input: {}", input);
        assert_eq!(last.lexeme, "");
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1,
            "Failed for input: {}",
            input
        );
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unterminated_string() {
    let (tokens, diagnostics) = scan("\"unterminated");
    assert_eq!(tokens, vec![Token::eof(1)]);
    assert_eq!(
        diagnostics,
        vec![Diagnostic {
            kind: DiagnosticKind::Lexical,
            line: 1,
            location: Location::Unspecified,
            message: "Unterminated string.".to_string(),
        }]
    );
    assert_eq!(
        diagnostics[0].to_string(),
        "[line 1] Error: Unterminated string."
    );
}

#[test]
fn test_unterminated_string_reports_last_line() {
    let (tokens, diagnostics) = scan("1 \"a\nb\nc");
    assert_eq!(tokens.len(), 2);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 3);
}

#[test]
fn test_unexpected_characters_continue_scanning() {
    let (tokens, diagnostics) = scan("1 @ 2 # 3");
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["1", "2", "3", ""]);

    let messages: Vec<String> = diagnostics.iter().map(|d| d.message.clone()).collect();
    assert_eq!(
        messages,
        vec![
            "Unexpected character '@'.".to_string(),
            "Unexpected character '#'.".to_string(),
        ]
    );
}

#[test]
fn test_non_ascii_letter_is_unexpected() {
    let (tokens, diagnostics) = scan("é");
    assert_eq!(tokens, vec![Token::eof(1)]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Unexpected character 'é'.");
}

#[test]
fn test_errors_on_multiple_lines() {
    let (_, diagnostics) = scan("$\n1\n&");
    let lines: Vec<usize> = diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 3]);
}

#[test]
fn test_lexer_with_custom_reporter() {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let tokens = Lexer::new("~").scan_tokens(&mut diagnostics);
    assert_eq!(tokens.len(), 1);
    assert_eq!(diagnostics.len(), 1);
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_token_display() {
    let (tokens, _) = scan("1.5 + \"a\"");
    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["NUMBER 1.5 1.5", "PLUS + null", "STRING \"a\" a", "EOF  null"]
    );
}
