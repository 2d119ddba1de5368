//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Illegal characters
//! - End-of-input behaviour

use super::{
    lexer::{offset_to_u32, tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_program() {
    let source = "let five = 4;
          let ten = 10;
          let add = fn(x,y){
          x + y;
          };
          let res = add(five,ten);
          !-/*5;
          5 < 10 > 5;
  "
    .to_string();
    let tokens = tokenize(source, Some("test.inti".to_string()));

    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "4"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "res"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Integer, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Integer, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (i, (token, (kind, value))) in tokens.iter().zip(expected.iter()).enumerate() {
        assert_eq!(token.kind, *kind, "token {} kind", i);
        assert_eq!(token.value, *value, "token {} value", i);
    }
}

#[test]
fn test_tokenize_keywords() {
    let source = "let fn true false if else return".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Fn);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_baz _underscore CamelCase lets".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_baz");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "lets");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_stops_at_digits() {
    let tokens = tokenize("foo1".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "1");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 007 9223372036854775808".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "007");
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "9223372036854775808");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_negative_number_is_two_tokens() {
    let tokens = tokenize("-5".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Dash);
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "5");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / == != < > = !".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Equals);
    assert_eq!(tokens[4].value, "==");
    assert_eq!(tokens[5].kind, TokenKind::NotEquals);
    assert_eq!(tokens[5].value, "!=");
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::Assignment);
    assert_eq!(tokens[9].kind, TokenKind::Not);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_two_character_operators_without_spaces() {
    let tokens = tokenize("a==b!=!c=d".to_string(), None);
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } , ;".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_characters_do_not_stop_tokenizing() {
    let source = "let x = @ 5 # é".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Integer);
    assert_eq!(tokens[5].kind, TokenKind::Illegal);
    assert_eq!(tokens[5].value, "#");
    assert_eq!(tokens[6].kind, TokenKind::Illegal);
    assert_eq!(tokens[6].value, "é");
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = " \t let \r\n  x\n=\t42  ".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, "");
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let abc == 12".to_string(), Some("span.inti".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 7);
    assert_eq!(tokens[2].span.start.0, 8);
    assert_eq!(tokens[2].span.end.0, 10);
    assert_eq!(tokens[3].span.start.0, 11);
    assert_eq!(tokens[3].span.end.0, 13);
    assert_eq!(tokens[4].span.start.0, 13);
    assert_eq!(*tokens[0].span.start.1, "span.inti");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);

    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_token_debug_line() {
    let tokens = tokenize("add + 10".to_string(), None);

    assert_eq!(tokens[0].to_string(), "Identifier (add)");
    assert_eq!(tokens[1].to_string(), "Plus");
    assert_eq!(tokens[2].debug(), "    6..8     Integer (10)");
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_offsets_saturate_at_u32_max() {
    assert_eq!(offset_to_u32(0), 0);
    assert_eq!(offset_to_u32(u32::MAX as usize), u32::MAX);
    assert_eq!(offset_to_u32(u32::MAX as usize + 1), u32::MAX);
    assert_eq!(offset_to_u32(usize::MAX), u32::MAX);
}
