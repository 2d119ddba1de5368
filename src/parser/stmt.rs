use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.traced("parse_stmt", |parser| {
        let kind = parser.current_token_kind();
        if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
            return handler(parser);
        }

        parse_expression_stmt(parser)
    })
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;

    // Optional, so single REPL expressions need no `;`
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: expression.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        expression,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();

    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Let(LetStmt {
        identifier: IdentifierExpr {
            value: name.value,
            span: name.span,
        },
        value,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

/// Parses statements up to the closing `}`, starting on the `{`.
///
/// Reaching the end of input first ends the block without a diagnostic.
/// Errors inside the block are recorded and the block keeps going.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    parser.traced("parse_block_stmt", |parser| {
        let start = parser.get_position();
        parser.advance();

        let mut statements = Vec::new();
        while !matches!(
            parser.current_token_kind(),
            TokenKind::CloseCurly | TokenKind::EOF
        ) {
            match parse_stmt(parser) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => parser.record(error),
            }
            parser.advance();
        }

        BlockStmt {
            body: statements,
            span: Span {
                start,
                end: parser.current_token().span.end.clone(),
            },
        }
    })
}
