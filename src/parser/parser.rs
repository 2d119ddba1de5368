//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens lazily from a [`Lexer`], keeping the current token
//! and one token of lookahead, and uses a Pratt parser with NUD/LED handlers
//! for expressions.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
    trace::Tracer,
};

/// The main parser structure that maintains parsing state.
///
/// Diagnostics are appended to `errors` as they are found and are never
/// cleared; a parser is used for exactly one source.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics recorded so far, in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    tracer: Option<Tracer>,
}

impl Parser {
    /// Creates a new Parser over `lexer` and primes the current and
    /// lookahead tokens.
    pub fn new(lexer: Lexer) -> Self {
        let position = lexer.position();
        let primer = MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span {
                start: position.clone(),
                end: position
            }
        );

        let mut parser = Parser {
            lexer,
            current_token: primer.clone(),
            peek_token: primer,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            tracer: None,
        };

        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Creates a parser that records a trace of the productions it enters.
    pub fn with_tracing(lexer: Lexer) -> Self {
        let mut parser = Parser::new(lexer);
        parser.tracer = Some(Tracer::new());
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek_token, next);
        mem::replace(&mut self.current_token, peek)
    }

    /// Requires the lookahead token to be of `expected_kind`.
    ///
    /// On a match the parser advances onto it and returns it. Otherwise
    /// nothing is consumed and an `UnexpectedToken` error positioned at the
    /// lookahead is returned.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek_token.kind,
                },
                self.peek_token.span.start.clone(),
            ));
        }

        self.advance();
        Ok(self.current_token.clone())
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current_token.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek_token.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&kind)
            .unwrap_or(&BindingPower::Default)
    }

    /// Appends a diagnostic.
    pub fn record(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Lines recorded by the tracer, empty when tracing is off.
    pub fn trace_lines(&self) -> &[String] {
        match &self.tracer {
            Some(tracer) => tracer.lines(),
            None => &[],
        }
    }

    /// Runs `f` between a `BEGIN name` and `END name` trace line.
    pub fn traced<T>(&mut self, name: &str, f: impl FnOnce(&mut Parser) -> T) -> T {
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.begin(name);
        }

        let result = f(self);

        if let Some(tracer) = self.tracer.as_mut() {
            tracer.end(name);
        }

        result
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    /// Parses statements until the end of input.
    ///
    /// A statement that fails is left out of the program and its error is
    /// recorded; parsing resumes at the following token.
    pub fn parse_program(&mut self) -> Program {
        let mut body = vec![];

        while self.current_token_kind() != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(stmt) => body.push(stmt),
                Err(error) => self.record(error),
            }
            self.advance();
        }

        Program { body }
    }
}

/// Parses `source` into a Program.
///
/// This is the main entry point for parsing. The tree is only trustworthy
/// when the returned error list is empty.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name used in positions, `shell` when `None`
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
