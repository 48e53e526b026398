//! Error type shared by the lexer and the parser.

use thiserror::Error;

use crate::ast::Token;

/// Convenience result type used across bitexp.
pub type Result<T> = std::result::Result<T, ExpressionError>;

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character or malformed numeric literal.
    Lexical,
    /// Unexpected or missing token.
    Syntax,
}

/// Error raised while tokenizing or parsing an expression.
///
/// `position` is a zero-based byte offset into the source, pointing at the first
/// character of the token near the error. End-of-input errors point one past the
/// last character. `None` means the offset is not known.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}{}", .position.map(|p| format!(" at offset {p}")).unwrap_or_default())]
pub struct ExpressionError {
    pub kind: ErrorKind,
    pub message: String,
    pub position: Option<usize>,
}

impl ExpressionError {
    pub fn lexical(message: impl Into<String>, position: usize) -> Self {
        Self {
            kind: ErrorKind::Lexical,
            message: message.into(),
            position: Some(position),
        }
    }

    pub fn syntax(message: impl Into<String>, position: Option<usize>) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            position,
        }
    }

    /// `Unexpected token '<text>'` at the token's offset.
    pub fn unexpected(token: &Token) -> Self {
        Self::syntax(
            format!("Unexpected token '{}'", token.text),
            Some(token.position),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_known_offset() {
        let err = ExpressionError::syntax("Expression cannot be empty", Some(0));
        assert_eq!(err.to_string(), "Expression cannot be empty at offset 0");
    }

    #[test]
    fn display_omits_unknown_offset() {
        let err = ExpressionError::syntax("Invalid expression", None);
        assert_eq!(err.to_string(), "Invalid expression");
    }
}
