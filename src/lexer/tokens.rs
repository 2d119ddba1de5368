use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Fn);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Identifier,
    Integer,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    Greater,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Let,
    Fn,
    True,
    False,
    If,
    Else,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Integer, TokenKind::Illegal]) {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One line per token, as printed by `--tokens` and `.tokens`.
    pub fn debug(&self) -> String {
        format!("{:>5}..{:<5} {}", self.span.start.0, self.span.end.0, self)
    }
}
