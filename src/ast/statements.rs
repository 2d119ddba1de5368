use std::{fmt::Display, slice::Iter};

use crate::Span;

use super::{
    ast::{Expr, Stmt},
    expressions::IdentifierExpr,
};

/// Block Statement
///
/// Body of an `if` branch or a function literal.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for stmt in &self.body {
            // Let and return already end in `;`
            match stmt {
                Stmt::Expression(_) => write!(f, "{}; ", stmt)?,
                _ => write!(f, "{} ", stmt)?,
            }
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub identifier: IdentifierExpr,
    pub value: Expr,
    pub span: Span,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} = {};", self.identifier, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return {};", self.value)
    }
}
