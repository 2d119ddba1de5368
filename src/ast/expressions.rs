use std::fmt::Display;

use crate::Span;

use super::{ast::Expr, statements::BlockStmt};

// LITERALS

/// Identifier Expression
/// Represents a name in the AST. This includes function parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub value: String,
    pub span: Span,
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// Represents a 64-bit signed integer literal. `literal` keeps the source
/// digits, which is what the literal renders as.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub literal: String,
    pub span: Span,
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPLEX

/// Prefix Expression
/// Represents `!x` or `-x`. Renders as `(!x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right_expr)
    }
}

/// Infix Expression
/// Represents a binary operation between two expressions. Renders as
/// `(left op right)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
    pub span: Span,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

/// Function Expression
/// Represents an anonymous function literal: `fn(a, b) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub parameters: Vec<IdentifierExpr>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.to_string())
            .collect::<Vec<String>>();

        write!(f, "fn({}) {}", parameters.join(", "), self.body)
    }
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.callee, arguments.join(", "))
    }
}
