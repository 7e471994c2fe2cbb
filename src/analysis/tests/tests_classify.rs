//! Tests for per-rule classification

use super::super::{Attribution, classify_rule};
use rstest::rstest;

#[rstest]
#[case("E.val = E1.val + T.val", Attribution::SAttributed)]
#[case("T.i = E.val", Attribution::LAttributed)]
#[case("T.i=E.val", Attribution::LAttributed)]
#[case("L.i   = T.type", Attribution::LAttributed)]
#[case("T'.inh = F.val", Attribution::SAttributed)]
#[case("digit.lexval = 5", Attribution::SAttributed)]
#[case("E.val == T.i", Attribution::SAttributed)]
#[case("", Attribution::SAttributed)]
fn test_classify(#[case] rule: &str, #[case] expected: Attribution) {
    assert_eq!(classify_rule(rule), expected);
}

#[test]
fn test_labels_and_rationales() {
    assert_eq!(Attribution::SAttributed.label(), "S-Attributed");
    assert_eq!(Attribution::LAttributed.to_string(), "L-Attributed");
    assert!(
        Attribution::LAttributed
            .rationale()
            .contains("inherited attributes")
    );
    assert!(
        Attribution::SAttributed
            .rationale()
            .contains("only synthesized attributes")
    );
}
