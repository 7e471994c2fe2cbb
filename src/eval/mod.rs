//! Arithmetic expression evaluation
//!
//! A small tokenizer plus recursive-descent evaluator over `+ - * / ** ^`,
//! parentheses, unary signs and integer/decimal literals. Failures never
//! escape: [`evaluate`] folds them into [`Evaluation::Failed`], whose display
//! form is `Error in evaluation: <message>`.

mod error;
mod lexer;
mod number;
mod parser;


use std::fmt;

pub use error::EvalError;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use number::format_number;
pub use parser::{MAX_DEPTH, evaluate_normalized};

/// Outcome of evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The numeric result
    Value(f64),
    /// Evaluation failed; rendered in place of the number
    Failed(EvalError),
}

impl Evaluation {
    /// The numeric result, if evaluation succeeded
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Failed(_) => None,
        }
    }

    /// Check if evaluation failed
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(&format_number(*v)),
            Self::Failed(err) => write!(f, "Error in evaluation: {err}"),
        }
    }
}

/// Rewrite the `^` power spelling to `**`
pub fn normalize_power(expression: &str) -> String {
    expression.replace('^', "**")
}

/// Evaluate an expression, capturing any failure in the result
pub fn evaluate(expression: &str) -> Evaluation {
    let normalized = normalize_power(expression);
    match evaluate_normalized(&normalized) {
        Ok(value) => Evaluation::Value(value),
        Err(err) => {
            tracing::debug!(expression = %normalized, error = %err, "evaluation failed");
            Evaluation::Failed(err)
        }
    }
}
