use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\n\r]+").unwrap();
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Lazy, one-shot tokenizer over a single source text.
///
/// `pos` is the byte offset of the current character and `read_pos` the
/// offset of the character after it. Once the end of input is reached every
/// call to [`Lexer::next_token`] returns an `EOF` token.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    read_pos: usize,
    ch: Option<char>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            pos: 0,
            read_pos: 0,
            ch: None,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    pub fn position(&self) -> Position {
        Position(offset_to_u32(self.pos), Rc::clone(&self.file))
    }

    fn read_char(&mut self) {
        self.pos = self.read_pos;
        self.ch = self.source[self.read_pos..].chars().next();
        if let Some(ch) = self.ch {
            self.read_pos += ch.len_utf8();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.read_pos..].chars().next()
    }

    /// Moves the cursor `n` bytes forward from the current character.
    pub fn advance_n(&mut self, n: usize) {
        self.read_pos = self.pos + n;
        self.read_char();
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let current = self.ch;
        match current {
            None => {
                let position = self.position();
                MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    Span {
                        start: position.clone(),
                        end: position
                    }
                )
            }
            Some('=') if self.peek_char() == Some('=') => {
                MK_DEFAULT_HANDLER!(self, TokenKind::Equals, "==")
            }
            Some('!') if self.peek_char() == Some('=') => {
                MK_DEFAULT_HANDLER!(self, TokenKind::NotEquals, "!=")
            }
            Some('=') => MK_DEFAULT_HANDLER!(self, TokenKind::Assignment, "="),
            Some('!') => MK_DEFAULT_HANDLER!(self, TokenKind::Not, "!"),
            Some('+') => MK_DEFAULT_HANDLER!(self, TokenKind::Plus, "+"),
            Some('-') => MK_DEFAULT_HANDLER!(self, TokenKind::Dash, "-"),
            Some('/') => MK_DEFAULT_HANDLER!(self, TokenKind::Slash, "/"),
            Some('*') => MK_DEFAULT_HANDLER!(self, TokenKind::Star, "*"),
            Some('<') => MK_DEFAULT_HANDLER!(self, TokenKind::Less, "<"),
            Some('>') => MK_DEFAULT_HANDLER!(self, TokenKind::Greater, ">"),
            Some(',') => MK_DEFAULT_HANDLER!(self, TokenKind::Comma, ","),
            Some(';') => MK_DEFAULT_HANDLER!(self, TokenKind::Semicolon, ";"),
            Some('(') => MK_DEFAULT_HANDLER!(self, TokenKind::OpenParen, "("),
            Some(')') => MK_DEFAULT_HANDLER!(self, TokenKind::CloseParen, ")"),
            Some('{') => MK_DEFAULT_HANDLER!(self, TokenKind::OpenCurly, "{"),
            Some('}') => MK_DEFAULT_HANDLER!(self, TokenKind::CloseCurly, "}"),
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => self.symbol_handler(),
            Some(ch) if ch.is_ascii_digit() => self.integer_handler(),
            Some(ch) => self.illegal_handler(ch),
        }
    }

    fn symbol_handler(&mut self) -> Token {
        let value = match SYMBOL_PATTERN.find(self.remainder()) {
            Some(matched) => String::from(matched.as_str()),
            None => String::new(),
        };
        let kind = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.run_token(kind, value)
    }

    fn integer_handler(&mut self) -> Token {
        let value = match INTEGER_PATTERN.find(self.remainder()) {
            Some(matched) => String::from(matched.as_str()),
            None => String::new(),
        };

        self.run_token(TokenKind::Integer, value)
    }

    fn illegal_handler(&mut self, ch: char) -> Token {
        self.run_token(TokenKind::Illegal, ch.to_string())
    }

    fn run_token(&mut self, kind: TokenKind, value: String) -> Token {
        let start = self.position();
        self.advance_n(value.len());
        MK_TOKEN!(
            kind,
            value,
            Span {
                start,
                end: self.position()
            }
        )
    }
}

/// Offsets past `u32::MAX` saturate instead of wrapping.
pub(crate) fn offset_to_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

/// Drains a fresh lexer over `source`. The last token is the single `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            return tokens;
        }
    }
}
