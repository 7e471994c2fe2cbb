//! End-to-end tests for the expression explainer

use rstest::rstest;
use sdt::explain::{DIGIT_PRODUCTION, LEXVAL_RULE};
use sdt::ui::{RenderOptions, render_expression_results};
use sdt::{ExplainerSolution, Operator};

use crate::helpers::card_body;

#[rstest]
#[case("2+3*4", "14")]
#[case("2**3+1", "9")]
#[case("2^10", "1024")]
#[case("(1 + 2) * 3", "9")]
#[case("1/4", "0.25")]
#[case("5-8", "-3")]
#[case("1/0", "Infinity")]
fn test_final_result(#[case] expression: &str, #[case] expected: &str) {
    let solution = ExplainerSolution::generate(expression);
    assert_eq!(solution.evaluation.to_string(), expected);
}

#[test]
fn test_operator_free_expression_is_single_chain() {
    let solution = ExplainerSolution::generate("  12 ");
    assert!(solution.operators.is_empty());
    assert_eq!(&solution.grammar[..2], &["E → T", "T → F"]);
    assert_eq!(
        solution.parse_tree,
        "   E\n   |\n   T\n   |\n   F\n   |\ndigit\n (12)"
    );
    assert_eq!(solution.semantic_rules.last(), Some(&LEXVAL_RULE));
}

#[test]
fn test_sum_of_product_worked_example() {
    let text = render_expression_results(
        &ExplainerSolution::generate("2+3*4"),
        &RenderOptions::default(),
    );

    assert_eq!(
        card_body(&text, "Step 1: Context-Free Grammar"),
        vec!["E → E+T | T", "T → T*F | F", "F → ( E ) | digit", DIGIT_PRODUCTION]
    );
    assert_eq!(card_body(&text, "Step 4: Final Result"), vec!["2+3*4 = 14"]);
}

#[test]
fn test_exponent_worked_example() {
    let solution = ExplainerSolution::generate("2**3+1");
    assert!(solution.operators.contains(Operator::StarStar));
    assert!(!solution.operators.contains(Operator::Star));
    assert!(solution.grammar.contains(&"F → P ** F | P"));
    assert!(
        solution
            .semantic_rules
            .contains(&"F.val = P.val ** F₁.val  [for F → P ** F₁]")
    );
    assert!(solution.parse_tree.contains("P**F"));
}

#[test]
fn test_bad_expression_still_renders() {
    let text = render_expression_results(
        &ExplainerSolution::generate("3+"),
        &RenderOptions::default(),
    );
    assert_eq!(
        card_body(&text, "Step 4: Final Result"),
        vec!["3+ = Error in evaluation: Unexpected end of input"]
    );
}
