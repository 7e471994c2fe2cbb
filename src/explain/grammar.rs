//! Context-free grammar selection
//!
//! Picks productions over `E`, `T`, `F` (and `P` when exponentiation is
//! present) from a fixed table, narrowed to the operators that occur.

use super::operators::{Operator, OperatorSet};

/// Terminal production appended to every grammar
pub const DIGIT_PRODUCTION: &str = "digit → 0 | 1 | 2 | ... | 9 | digit digit";

/// Build the grammar for an operator set
pub fn generate_grammar(operators: &OperatorSet) -> Vec<&'static str> {
    let mut productions = vec![
        expression_production(operators),
        term_production(operators),
    ];

    if operators.has_exponent() {
        productions.push("F → P ** F | P");
        productions.push("P → ( E ) | digit");
    } else {
        productions.push("F → ( E ) | digit");
    }

    productions.push(DIGIT_PRODUCTION);

    tracing::trace!(
        exponent = operators.has_exponent(),
        count = productions.len(),
        "selected grammar"
    );
    productions
}

fn expression_production(operators: &OperatorSet) -> &'static str {
    match (
        operators.contains(Operator::Plus),
        operators.contains(Operator::Minus),
    ) {
        (true, true) => "E → E+T | E-T | T",
        (true, false) => "E → E+T | T",
        (false, true) => "E → E-T | T",
        (false, false) => "E → T",
    }
}

/// `**` is tracked separately, so only a bare `*` counts here
fn term_production(operators: &OperatorSet) -> &'static str {
    match (
        operators.contains(Operator::Star),
        operators.contains(Operator::Slash),
    ) {
        (true, true) => "T → T*F | T/F | F",
        (true, false) => "T → T*F | F",
        (false, true) => "T → T/F | F",
        (false, false) => "T → F",
    }
}
