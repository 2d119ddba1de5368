/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Stmt`/`Expr` sum types and the `Program` root
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the statement node kinds and blocks
///
/// Every node renders through `Display`; the rendering parenthesizes each
/// prefix and infix application.
pub mod ast;
pub mod expressions;
pub mod statements;
