//! Shared helpers for integration tests

#![allow(dead_code)]

use sdt::RuleAnalysisReport;

/// Build a report from literal grammar and rule lines
pub fn report(grammar: &[&str], rules: &[&str]) -> RuleAnalysisReport {
    RuleAnalysisReport::from_fields(&grammar.join("\n"), &rules.join("\n"))
        .expect("non-empty grammar and rules")
}

/// Lines of a rendered card body, with indentation removed.
///
/// Body lines are indented or blank; the first flush-left line after the
/// underline starts the next card.
pub fn card_body<'a>(rendered: &'a str, title: &str) -> Vec<&'a str> {
    let mut body: Vec<&str> = rendered
        .lines()
        .skip_while(|line| *line != title)
        .skip(2)
        .take_while(|line| line.is_empty() || line.starts_with(' '))
        .map(str::trim)
        .collect();
    while body.last() == Some(&"") {
        body.pop();
    }
    body
}
