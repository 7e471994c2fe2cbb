//! Tests for the full explainer pipeline

use super::super::{ExplainerSolution, Operator, clean_expression};

#[test]
fn test_whitespace_is_stripped() {
    assert_eq!(clean_expression(" 2 +\t3 * 4\n"), "2+3*4");
}

#[test]
fn test_sum_and_product_solution() {
    let solution = ExplainerSolution::generate("2 + 3 * 4");
    assert_eq!(solution.expression, "2+3*4");
    assert!(solution.operators.contains(Operator::Plus));
    assert!(solution.operators.contains(Operator::Star));
    assert_eq!(solution.operators.len(), 2);
    assert_eq!(solution.grammar[0], "E → E+T | T");
    assert_eq!(solution.grammar[1], "T → T*F | F");
    assert_eq!(solution.evaluation.value(), Some(14.0));
}

#[test]
fn test_exponent_solution() {
    let solution = ExplainerSolution::generate("2**3+1");
    assert_eq!(
        solution.operators.iter().collect::<Vec<_>>(),
        vec![Operator::StarStar, Operator::Plus]
    );
    assert!(solution.grammar.contains(&"P → ( E ) | digit"));
    assert_eq!(solution.evaluation.value(), Some(9.0));
}

#[test]
fn test_caret_power_solution() {
    let solution = ExplainerSolution::generate("2^10");
    assert_eq!(solution.evaluation.value(), Some(1024.0));
}

#[test]
fn test_plain_number_solution() {
    let solution = ExplainerSolution::generate("7");
    assert_eq!(solution.grammar[0], "E → T");
    assert_eq!(solution.grammar[1], "T → F");
    assert!(solution.parse_tree.ends_with("digit\n (7)"));
}

#[test]
fn test_evaluation_error_is_captured() {
    let solution = ExplainerSolution::generate("2+*3");
    assert!(solution.evaluation.is_error());
    assert!(
        solution
            .evaluation
            .to_string()
            .starts_with("Error in evaluation: ")
    );
    // The other artifacts are still produced
    assert_eq!(solution.grammar.len(), 4);
}

#[test]
fn test_generation_is_idempotent() {
    let first = ExplainerSolution::generate("(1+2)**3-4/5");
    let second = ExplainerSolution::generate("(1+2)**3-4/5");
    assert_eq!(first, second);
}
