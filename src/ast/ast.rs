use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
        PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Statement
///
/// Every statement kind the grammar produces. Blocks are not statements of
/// their own; they only appear as bodies of `if` and `fn`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }

    /// Lexeme of the token the statement starts with.
    pub fn token_literal(&self) -> String {
        match self {
            Stmt::Let(_) => String::from("let"),
            Stmt::Return(_) => String::from("return"),
            Stmt::Expression(stmt) => stmt.expression.token_literal(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
///
/// Children are owned through `Box`/`Vec`, so a tree is always acyclic and
/// dropped top-down with its root.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => &expr.span,
            Expr::Integer(expr) => &expr.span,
            Expr::Boolean(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Infix(expr) => &expr.span,
            Expr::If(expr) => &expr.span,
            Expr::Function(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }

    /// Lexeme of the token that selected this expression's production.
    ///
    /// For infix and call expressions that is the operator (`+`, `(`), not
    /// the first token of the left operand.
    pub fn token_literal(&self) -> String {
        match self {
            Expr::Identifier(expr) => expr.value.clone(),
            Expr::Integer(expr) => expr.literal.clone(),
            Expr::Boolean(expr) => expr.value.to_string(),
            Expr::Prefix(expr) => expr.operator.clone(),
            Expr::Infix(expr) => expr.operator.clone(),
            Expr::If(_) => String::from("if"),
            Expr::Function(_) => String::from("fn"),
            Expr::Call(_) => String::from("("),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr),
            Expr::Integer(expr) => write!(f, "{}", expr),
            Expr::Boolean(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
            Expr::If(expr) => write!(f, "{}", expr),
            Expr::Function(expr) => write!(f, "{}", expr),
            Expr::Call(expr) => write!(f, "{}", expr),
        }
    }
}

/// Root of a parsed source: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn token_literal(&self) -> String {
        match self.body.first() {
            Some(stmt) => stmt.token_literal(),
            None => String::new(),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.body {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Any node of a parsed tree, borrowed.
///
/// This is the single closed node type a tree walker dispatches on, so
/// programs and blocks are reachable through the same entry point as
/// statements and expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Program(&'a Program),
    Stmt(&'a Stmt),
    Block(&'a BlockStmt),
    Expr(&'a Expr),
}

impl<'a> Node<'a> {
    /// Direct children in source order. Function parameters are names, not
    /// nodes, and are not included.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Program(program) => program.body.iter().map(Node::Stmt).collect(),
            Node::Block(block) => block.body.iter().map(Node::Stmt).collect(),
            Node::Stmt(Stmt::Let(stmt)) => vec![Node::Expr(&stmt.value)],
            Node::Stmt(Stmt::Return(stmt)) => vec![Node::Expr(&stmt.value)],
            Node::Stmt(Stmt::Expression(stmt)) => vec![Node::Expr(&stmt.expression)],
            Node::Expr(expr) => match expr {
                Expr::Identifier(_) | Expr::Integer(_) | Expr::Boolean(_) => vec![],
                Expr::Prefix(prefix) => vec![Node::Expr(prefix.right_expr.as_ref())],
                Expr::Infix(infix) => vec![Node::Expr(infix.left.as_ref()), Node::Expr(infix.right.as_ref())],
                Expr::If(if_expr) => {
                    let mut children = vec![
                        Node::Expr(if_expr.condition.as_ref()),
                        Node::Block(&if_expr.consequence),
                    ];
                    if let Some(alternative) = &if_expr.alternative {
                        children.push(Node::Block(alternative));
                    }
                    children
                }
                Expr::Function(function) => vec![Node::Block(&function.body)],
                Expr::Call(call) => std::iter::once(Node::Expr(call.callee.as_ref()))
                    .chain(call.arguments.iter().map(Node::Expr))
                    .collect(),
            },
        }
    }

    pub fn token_literal(&self) -> String {
        match self {
            Node::Program(program) => program.token_literal(),
            Node::Stmt(stmt) => stmt.token_literal(),
            Node::Block(_) => String::from("{"),
            Node::Expr(expr) => expr.token_literal(),
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        Node::Stmt(stmt)
    }
}

impl<'a> From<&'a BlockStmt> for Node<'a> {
    fn from(block: &'a BlockStmt) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Node::Expr(expr)
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Program(program) => write!(f, "{}", program),
            Node::Stmt(stmt) => write!(f, "{}", stmt),
            Node::Block(block) => write!(f, "{}", block),
            Node::Expr(expr) => write!(f, "{}", expr),
        }
    }
}
