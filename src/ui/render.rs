//! Text rendering of result panels
//!
//! Each panel is a sequence of cards: a title, an underline, and an
//! indented body. Rendering always produces the whole panel; callers replace
//! their previous output wholesale.

use super::message::Message;
use super::options::RenderOptions;
use crate::analysis::RuleAnalysisReport;
use crate::explain::ExplainerSolution;

const S_ATTRIBUTED_GUIDE: &str = "S-Attributed SDT: Uses only synthesized attributes that flow bottom-up in the parse tree. Perfect for shift-reduce parsers.";
const L_ATTRIBUTED_GUIDE: &str = "L-Attributed SDT: Uses both synthesized and inherited attributes. Inherited attributes flow from parent to children or left-to-right between siblings.";

/// A titled block of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: Vec<String>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
        }
    }

    /// Add one body line; embedded newlines become separate lines
    pub fn line(mut self, text: impl AsRef<str>) -> Self {
        self.body.extend(text.as_ref().lines().map(String::from));
        self
    }

    pub fn lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines.into_iter().fold(self, |card, l| card.line(l))
    }

    /// Empty body line
    pub fn blank(mut self) -> Self {
        self.body.push(String::new());
        self
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        let width = self.title.chars().count();
        out.extend(std::iter::repeat_n(options.rule_char, width));

        let indent = options.indentation();
        for line in &self.body {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&indent);
                out.push_str(line);
            }
        }
        out
    }
}

/// Join cards with a blank line between them
pub fn render_cards(cards: &[Card], options: &RenderOptions) -> String {
    cards
        .iter()
        .map(|card| card.render(options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Cards for a worked expression example
pub fn expression_cards(solution: &ExplainerSolution) -> Vec<Card> {
    vec![
        Card::new(format!("Complete S-SDT Solution for: {}", solution.expression)),
        Card::new("Step 1: Context-Free Grammar").lines(&solution.grammar),
        Card::new("Step 2: Parse Tree").line(&solution.parse_tree),
        Card::new("Step 3: Semantic Rules").lines(&solution.semantic_rules),
        Card::new("Step 4: Final Result")
            .line(format!("{} = {}", solution.expression, solution.evaluation)),
    ]
}

/// Render the expression results panel
pub fn render_expression_results(solution: &ExplainerSolution, options: &RenderOptions) -> String {
    render_cards(&expression_cards(solution), options)
}

/// Cards for a rule analysis report
pub fn rules_cards(report: &RuleAnalysisReport, options: &RenderOptions) -> Vec<Card> {
    let mut cards = vec![
        Card::new("Analysis Summary")
            .line(format!("[{}]", report.summary()))
            .blank()
            .line(report.summary_note()),
        Card::new("Given Grammar").lines(&report.grammar),
    ];

    let mut analysis = Card::new("Rule-by-Rule Analysis");
    for (i, item) in report.items.iter().enumerate() {
        if i > 0 {
            analysis = analysis.blank();
        }
        analysis = analysis
            .line(format!("Rule {}", item.ordinal))
            .line(format!("  {}", item.rule))
            .line(format!("  [{}]", item.attribution.label()))
            .line(format!("  {}", item.rationale()));
    }
    cards.push(analysis);

    if options.show_guide {
        cards.push(
            Card::new("Understanding the Results")
                .line(S_ATTRIBUTED_GUIDE)
                .blank()
                .line(L_ATTRIBUTED_GUIDE),
        );
    }

    cards
}

/// Render the rules results panel
pub fn render_rules_results(report: &RuleAnalysisReport, options: &RenderOptions) -> String {
    render_cards(&rules_cards(report, options), options)
}

/// One-line form of a status message
pub fn render_message(message: &Message) -> String {
    format!("[{}] {}", message.kind.as_str(), message.text)
}
