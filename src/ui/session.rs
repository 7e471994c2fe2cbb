//! Event-driven presentation session
//!
//! Every user action is one synchronous cycle: extract and validate input,
//! compute, then replace the affected output region wholesale. Invalid
//! input posts an error message and leaves prior output untouched.

use std::time::Instant;

use super::message::{Message, MessageBoard, MessageKind, MessagePhase};
use super::options::SessionConfig;
use super::panel::Panel;
use super::render::{render_expression_results, render_rules_results};
use crate::analysis::RuleAnalysisReport;
use crate::explain::ExplainerSolution;
use crate::input::{self, InputError};

/// The editable input fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub expression: String,
    pub grammar: String,
    pub rules: String,
}

/// A user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Make a panel visible, hiding the other
    ShowPanel(Panel),
    SetExpression(String),
    /// Evaluate button or Enter in the expression field
    SubmitExpression,
    SetGrammar(String),
    SetRules(String),
    AddGrammarLine(String),
    AddRuleLine(String),
    AnalyzeRules,
}

/// What a handled event changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    PanelShown(Panel),
    FieldChanged,
    /// The panel's output region was replaced
    Rendered(Panel),
    /// Validation failed; an error message was posted
    Rejected(InputError),
    /// Nothing to do
    Ignored,
}

/// UI state for both tools
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    panel: Option<Panel>,
    fields: Fields,
    expression_output: Option<String>,
    rules_output: Option<String>,
    messages: MessageBoard,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let messages = MessageBoard::new(config.message_duration, config.fade_duration);
        Self {
            config,
            panel: None,
            fields: Fields::default(),
            expression_output: None,
            rules_output: None,
            messages,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The visible panel, if any
    pub fn panel(&self) -> Option<Panel> {
        self.panel
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Last rendered output of a panel
    pub fn output(&self, panel: Panel) -> Option<&str> {
        match panel {
            Panel::Expression => self.expression_output.as_deref(),
            Panel::Rules => self.rules_output.as_deref(),
        }
    }

    /// Messages still visible at `now`
    pub fn messages(&mut self, now: Instant) -> Vec<(&Message, MessagePhase)> {
        self.messages.active(now)
    }

    /// Post an informational message
    pub fn notify(&mut self, text: impl Into<String>, now: Instant) -> Message {
        self.messages.post(MessageKind::Info, text, now)
    }

    /// Handle one event
    pub fn handle(&mut self, event: Event, now: Instant) -> Update {
        tracing::debug!(?event, panel = ?self.panel, "handling event");
        self.messages.prune(now);

        match event {
            Event::ShowPanel(panel) => {
                self.panel = Some(panel);
                Update::PanelShown(panel)
            }
            Event::SetExpression(text) => {
                self.fields.expression = text;
                Update::FieldChanged
            }
            Event::SetGrammar(text) => {
                self.fields.grammar = text;
                Update::FieldChanged
            }
            Event::SetRules(text) => {
                self.fields.rules = text;
                Update::FieldChanged
            }
            Event::AddGrammarLine(line) => {
                if input::append_line(&mut self.fields.grammar, &line) {
                    Update::FieldChanged
                } else {
                    Update::Ignored
                }
            }
            Event::AddRuleLine(line) => {
                if input::append_line(&mut self.fields.rules, &line) {
                    Update::FieldChanged
                } else {
                    Update::Ignored
                }
            }
            Event::SubmitExpression => self.submit_expression(now),
            Event::AnalyzeRules => self.analyze_rules(now),
        }
    }

    fn submit_expression(&mut self, now: Instant) -> Update {
        let solution = match input::expression(&self.fields.expression) {
            Ok(expression) => ExplainerSolution::generate(expression),
            Err(err) => return self.reject(err, now),
        };
        self.expression_output = Some(render_expression_results(&solution, &self.config.render));
        Update::Rendered(Panel::Expression)
    }

    fn analyze_rules(&mut self, now: Instant) -> Update {
        let report = match RuleAnalysisReport::from_fields(&self.fields.grammar, &self.fields.rules)
        {
            Ok(report) => report,
            Err(err) => return self.reject(err, now),
        };
        self.rules_output = Some(render_rules_results(&report, &self.config.render));
        Update::Rendered(Panel::Rules)
    }

    fn reject(&mut self, err: InputError, now: Instant) -> Update {
        self.messages.post(MessageKind::Error, err.to_string(), now);
        Update::Rejected(err)
    }
}
