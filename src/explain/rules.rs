//! Semantic rule generation
//!
//! Every rule is a synthesized-attribute equation: values flow bottom-up
//! from `digit.lexval` to `E.val`. Inherited attributes are never emitted.

use super::operators::{Operator, OperatorSet};

/// Rule defining the lexical value of a digit, always last
pub const LEXVAL_RULE: &str = "digit.lexval = numerical value of the digit";

/// Build the semantic rules for an operator set, mirroring the grammar
pub fn generate_semantic_rules(operators: &OperatorSet) -> Vec<&'static str> {
    let mut rules = Vec::new();

    let plus = operators.contains(Operator::Plus);
    let minus = operators.contains(Operator::Minus);
    if plus || minus {
        if plus {
            rules.push("E.val = E₁.val + T.val  [for E → E₁ + T]");
        }
        if minus {
            rules.push("E.val = E₁.val - T.val  [for E → E₁ - T]");
        }
        rules.push("E.val = T.val  [for E → T]");
    } else {
        rules.push("E.val = T.val");
    }

    let star = operators.contains(Operator::Star);
    let slash = operators.contains(Operator::Slash);
    if star || slash {
        if star {
            rules.push("T.val = T₁.val * F.val  [for T → T₁ * F]");
        }
        if slash {
            rules.push("T.val = T₁.val / F.val  [for T → T₁ / F]");
        }
        rules.push("T.val = F.val  [for T → F]");
    } else {
        rules.push("T.val = F.val");
    }

    if operators.has_exponent() {
        if operators.contains(Operator::StarStar) {
            rules.push("F.val = P.val ** F₁.val  [for F → P ** F₁]");
        } else {
            rules.push("F.val = P.val ^ F₁.val  [for F → P ^ F₁]");
        }
        rules.push("F.val = P.val  [for F → P]");
        rules.push("P.val = E.val  [for P → ( E )]");
        rules.push("P.val = digit.lexval  [for P → digit]");
    } else {
        rules.push("F.val = E.val  [for F → ( E )]");
        rules.push("F.val = digit.lexval  [for F → digit]");
    }

    rules.push(LEXVAL_RULE);
    rules
}
