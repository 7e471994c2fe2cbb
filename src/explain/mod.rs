//! Expression explainer
//!
//! Turns one arithmetic expression into the four artifacts of a worked
//! syntax-directed translation example:
//!
//! ```text
//! expression ─┬─ OperatorSet ─┬─ grammar
//!             │               └─ semantic rules
//!             ├─ parse tree diagram
//!             └─ evaluation
//! ```
//!
//! All functions are pure; the same input always yields identical output.

mod grammar;
mod operators;
mod rules;
mod tree;

#[cfg(test)]
mod tests;

pub use grammar::{DIGIT_PRODUCTION, generate_grammar};
pub use operators::{Operator, OperatorSet};
pub use rules::{LEXVAL_RULE, generate_semantic_rules};
pub use tree::{TreeShape, format_parse_tree};

use crate::eval::{Evaluation, evaluate};

/// Remove all whitespace from an expression
pub fn clean_expression(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A complete worked example for one expression
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainerSolution {
    /// The whitespace-stripped expression
    pub expression: String,
    pub operators: OperatorSet,
    pub grammar: Vec<&'static str>,
    pub parse_tree: String,
    pub semantic_rules: Vec<&'static str>,
    pub evaluation: Evaluation,
}

impl ExplainerSolution {
    /// Build every artifact for an expression.
    ///
    /// Never fails: an expression that cannot be evaluated carries the error
    /// in [`ExplainerSolution::evaluation`].
    pub fn generate(expression: &str) -> Self {
        let expression = clean_expression(expression);
        let operators = OperatorSet::detect(&expression);

        Self {
            grammar: generate_grammar(&operators),
            parse_tree: format_parse_tree(&expression),
            semantic_rules: generate_semantic_rules(&operators),
            evaluation: evaluate(&expression),
            operators,
            expression,
        }
    }
}
