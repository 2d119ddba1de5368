use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// On entry the current token starts the expression; on return it is the
/// expression's last token.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.traced("parse_expr", |parser| {
        // First parse NUD
        let token_kind = parser.current_token_kind();
        let nud = match parser.get_nud_lookup().get(&token_kind) {
            Some(nud) => *nud,
            None => {
                return Err(Error::new(
                    ErrorImpl::NoParseRule { kind: token_kind },
                    parser.get_position(),
                ))
            }
        };

        let mut left = nud(parser)?;

        // While the lookahead binds tighter than bp, fold it into lhs
        while parser.peek_token_kind() != TokenKind::Semicolon && parser.peek_binding_power() > bp {
            let led = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
                Some(led) => *led,
                None => return Ok(left),
            };

            parser.advance();
            let operator_bp = parser.current_binding_power();
            left = led(parser, left, operator_bp)?;
        }

        Ok(left)
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Integer => match token.value.parse::<i64>() {
            Ok(value) => Ok(Expr::Integer(IntegerExpr {
                value,
                literal: token.value,
                span: token.span,
            })),
            Err(_) => Err(Error::new(
                ErrorImpl::IntegerParseError { token: token.value },
                token.span.start,
            )),
        },
        TokenKind::Identifier => Ok(Expr::Identifier(IdentifierExpr {
            value: token.value,
            span: token.span,
        })),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            span: token.span,
        })),
        kind => Err(Error::new(
            ErrorImpl::NoParseRule { kind },
            token.span.start,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.traced("parse_prefix_expr", |parser| {
        let operator_token = parser.advance();
        let rhs = parse_expr(parser, BindingPower::Unary)?;

        Ok(Expr::Prefix(PrefixExpr {
            span: Span {
                start: operator_token.span.start,
                end: rhs.get_span().end.clone(),
            },
            operator: operator_token.value,
            right_expr: Box::new(rhs),
        }))
    })
}

/// The right operand is parsed at the operator's own binding power, which
/// makes operators of equal precedence associate to the left.
pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    parser.traced("parse_infix_expr", |parser| {
        let operator_token = parser.advance();
        let right = parse_expr(parser, bp)?;

        Ok(Expr::Infix(InfixExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            },
            left: Box::new(left),
            operator: operator_token.value,
            right: Box::new(right),
        }))
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.get_position();

    parser.expect(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.get_position();

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_fn_params(parser)?;

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser);

    Ok(Expr::Function(FunctionExpr {
        parameters,
        body,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

/// Current token is the `(` opening the list; ends on the matching `)`.
fn parse_fn_params(parser: &mut Parser) -> Result<Vec<IdentifierExpr>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    let name = parser.expect(TokenKind::Identifier)?;
    parameters.push(IdentifierExpr {
        value: name.value,
        span: name.span,
    });

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        let name = parser.expect(TokenKind::Identifier)?;
        parameters.push(IdentifierExpr {
            value: name.value,
            span: name.span,
        });
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let arguments = parse_call_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        callee: Box::new(left),
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut args = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Default)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(args)
}
