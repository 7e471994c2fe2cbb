//! End-to-end tests for rule classification

use sdt::ui::{RenderOptions, render_rules_results};
use sdt::{Attribution, InputError, RuleAnalysisReport};

use crate::helpers::{card_body, report};

#[test]
fn test_synthesized_only_rule_set() {
    let report = report(
        &["E → E + T | T", "T → digit"],
        &["E.val = E1.val + T.val", "E.val = T.val", "T.val = digit.lexval"],
    );
    assert_eq!(report.attribution(), Attribution::SAttributed);
    assert!(report.items.iter().all(|i| i.attribution.is_s_attributed()));
}

#[test]
fn test_single_inherited_rule_taints_report() {
    let report = report(
        &["T → F T'", "T' → * F T'"],
        &["T'.i = F.val", "T.val = T'.s", "T'.s = T'.i"],
    );
    assert_eq!(report.attribution(), Attribution::LAttributed);
    let labels: Vec<_> = report.items.iter().map(|i| i.attribution).collect();
    assert_eq!(
        labels,
        vec![
            Attribution::LAttributed,
            Attribution::SAttributed,
            Attribution::SAttributed
        ]
    );
}

#[test]
fn test_rendered_report() {
    let text = render_rules_results(
        &report(&["E → T"], &["E.val = T.val", "T.i = E.val"]),
        &RenderOptions::default(),
    );
    assert_eq!(
        card_body(&text, "Analysis Summary"),
        vec![
            "[L-Attributed SDT]",
            "",
            "Some rules use inherited attributes - requires left-to-right evaluation."
        ]
    );
    assert_eq!(card_body(&text, "Given Grammar"), vec!["E → T"]);
}

#[test]
fn test_blank_fields_rejected() {
    assert_eq!(
        RuleAnalysisReport::from_fields("", "E.val = T.val"),
        Err(InputError::EmptyGrammar)
    );
    assert_eq!(
        RuleAnalysisReport::from_fields("E → T", ""),
        Err(InputError::EmptyRules)
    );
}
