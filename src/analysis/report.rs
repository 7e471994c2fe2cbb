//! Rule analysis report

use super::classify::{Attribution, classify_rule};
use crate::input::{self, InputError};

/// Classification of one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleAnalysisItem {
    pub rule: String,
    /// 1-based position in input order
    pub ordinal: usize,
    pub attribution: Attribution,
}

impl RuleAnalysisItem {
    pub fn rationale(&self) -> &'static str {
        self.attribution.rationale()
    }
}

/// Rule-by-rule analysis together with the grammar it was given against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleAnalysisReport {
    pub grammar: Vec<String>,
    pub items: Vec<RuleAnalysisItem>,
}

impl RuleAnalysisReport {
    /// Classify already-extracted rules, preserving their order
    pub fn analyze(grammar: Vec<String>, rules: Vec<String>) -> Self {
        let items = rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| {
                let attribution = classify_rule(&rule);
                tracing::debug!(ordinal = index + 1, %attribution, rule = %rule, "classified rule");
                RuleAnalysisItem {
                    rule,
                    ordinal: index + 1,
                    attribution,
                }
            })
            .collect();

        Self { grammar, items }
    }

    /// Validate raw multi-line fields, then analyze.
    ///
    /// The grammar is checked before the rules.
    pub fn from_fields(grammar: &str, rules: &str) -> Result<Self, InputError> {
        let grammar = input::grammar_lines(grammar)?;
        let rules = input::rule_lines(rules)?;
        Ok(Self::analyze(grammar, rules))
    }

    /// S-attributed only if every rule is
    pub fn attribution(&self) -> Attribution {
        if self.items.iter().all(|item| item.attribution.is_s_attributed()) {
            Attribution::SAttributed
        } else {
            Attribution::LAttributed
        }
    }

    /// Headline for the whole rule set
    pub fn summary(&self) -> &'static str {
        match self.attribution() {
            Attribution::SAttributed => "S-Attributed SDT",
            Attribution::LAttributed => "L-Attributed SDT",
        }
    }

    /// One-sentence consequence of the overall class
    pub fn summary_note(&self) -> &'static str {
        match self.attribution() {
            Attribution::SAttributed => {
                "All rules use only synthesized attributes - perfect for bottom-up evaluation!"
            }
            Attribution::LAttributed => {
                "Some rules use inherited attributes - requires left-to-right evaluation."
            }
        }
    }
}
