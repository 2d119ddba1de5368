//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Lexes a fixed-text token at the lexer's cursor
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Produces a token whose lexeme is the fixed text `$value`, starting at the
/// lexer's current character, and moves the lexer past it.
///
/// # Example
///
/// ```ignore
/// Some('+') => MK_DEFAULT_HANDLER!(self, TokenKind::Plus, "+"),
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($lexer:expr, $kind:expr, $value:literal) => {{
        let start = $lexer.position();
        $lexer.advance_n($value.len());
        MK_TOKEN!(
            $kind,
            String::from($value),
            Span {
                start,
                end: $lexer.position(),
            }
        )
    }};
}
