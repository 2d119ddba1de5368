//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API the way the binary does: source text goes
//! through the lexer and parser, and the result is either a rendered program
//! or a list of formatted diagnostics.

use inti::{
    ast::ast::{Expr, Stmt},
    format_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    repl::{evaluate_line, Action, Repl},
};

const PROGRAM: &str = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
";

#[test]
fn test_parse_full_program() {
    let (program, errors) = parse(PROGRAM.to_string(), Some("main.inti".to_string()));

    // Neither `/` nor `*` can start an expression
    assert_eq!(
        errors.iter().map(|error| error.to_string()).collect::<Vec<String>>(),
        vec![
            "no parse rule for token kind Slash",
            "no parse rule for token kind Star",
        ]
    );
    assert_eq!(errors[0].get_position().1.as_str(), "main.inti");

    let kinds: Vec<&str> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Let(_) => "let",
            Stmt::Return(_) => "return",
            Stmt::Expression(_) => "expression",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["let", "let", "let", "let", "expression", "expression", "expression", "expression", "expression"]
    );
}

#[test]
fn test_parse_valid_program_renders() {
    let source = "let add = fn(x, y) { x + y; };\nlet result = add(5, 10 * 2);\nif (result > 20) { result } else { 0 }";
    let (program, errors) = parse(source.to_string(), None);

    assert!(errors.is_empty());
    assert_eq!(program.len(), 3);
    assert_eq!(
        program.to_string(),
        "let add = fn(x, y) { (x + y); };let result = add(5, (10 * 2));if ((result > 20)) { result; } else { 0; }"
    );

    match &program.body[2] {
        Stmt::Expression(stmt) => assert!(matches!(stmt.expression, Expr::If(_))),
        other => panic!("expected if expression statement, got {:?}", other),
    }
}

#[test]
fn test_tokenize_then_parse_agree_on_positions() {
    let source = "let x = 1;\nlet y x;";
    let tokens = tokenize(source.to_string(), None);
    let (_, errors) = parse(source.to_string(), None);

    assert_eq!(errors.len(), 1);

    // The error points at the token the parser was looking at
    let offending = tokens
        .iter()
        .find(|token| token.span.start.0 == errors[0].get_position().0)
        .expect("error should point at a token");
    assert_eq!(offending.kind, TokenKind::Identifier);
    assert_eq!(offending.value, "x");
}

#[test]
fn test_format_error_points_at_offending_token() {
    let source = "let a = 1;\n  let b 2;";
    let (_, errors) = parse(source.to_string(), Some("main.inti".to_string()));

    assert_eq!(errors.len(), 1);
    assert_eq!(
        format_error(&errors[0], source),
        "Error: UnexpectedToken (expected `Assignment`, found `Integer`)\n-> main.inti\n  |\n2 | let b 2;\n  | ------^"
    );
}

#[test]
fn test_format_error_at_end_of_input() {
    let source = "add(1, 2";
    let (_, errors) = parse(source.to_string(), None);

    assert_eq!(errors.len(), 1);
    let formatted = format_error(&errors[0], source);

    assert!(formatted.contains("-> shell"));
    assert!(formatted.contains("1 | add(1, 2"));
}

#[test]
fn test_repl_session() {
    let mut repl = Repl::new(false);

    assert_eq!(
        repl.handle_line("a + b * c"),
        Action::Print(vec!["(a + (b * c))".to_string()])
    );
    assert_eq!(
        repl.handle_line("let = 5;"),
        Action::Print(vec![
            "\texpected token kind Identifier, found Assignment".to_string(),
            "\tno parse rule for token kind Assignment".to_string(),
        ])
    );
    // Errors from the previous line do not leak into the next one
    assert_eq!(
        repl.handle_line("fn(x) { x }(1)"),
        Action::Print(vec!["fn(x) { x; }(1)".to_string()])
    );
    assert_eq!(repl.handle_line("quit"), Action::Exit);
}

#[test]
fn test_evaluate_line_reports_every_error() {
    let output = evaluate_line("let x 1; @ ; 99999999999999999999", false);

    assert_eq!(
        output,
        vec![
            "\texpected token kind Assignment, found Integer",
            "\tno parse rule for token kind Illegal",
            "\tno parse rule for token kind Semicolon",
            "\tcould not parse \"99999999999999999999\" as integer",
        ]
    );
}
