//! Error types for expression evaluation.

use thiserror::Error;

/// Errors raised while tokenizing or evaluating an arithmetic expression.
///
/// Offsets are byte offsets into the power-normalized expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A character sequence the lexer does not recognize.
    #[error("Invalid or unexpected token '{text}' at offset {offset}")]
    InvalidToken { text: String, offset: usize },

    /// A valid token in a position the grammar does not allow.
    #[error("Unexpected token '{text}' at offset {offset}")]
    UnexpectedToken { text: String, offset: usize },

    /// The expression stopped where an operand was required.
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// An opening parenthesis without a matching `)`.
    #[error("Missing ')' for '(' at offset {offset}")]
    UnclosedParen { offset: usize },

    /// Parentheses or `**` chains nested past the evaluator's limit.
    #[error("Expression nested too deeply at offset {offset}")]
    TooDeep { offset: usize },

    /// A numeric literal that does not fit an `f64`.
    #[error("Invalid number '{text}' at offset {offset}")]
    InvalidNumber { text: String, offset: usize },
}
