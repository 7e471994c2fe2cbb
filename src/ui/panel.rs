//! Panel identifiers

use std::fmt;
use std::str::FromStr;

/// Which tool panel is visible. Only the presentation layer sets this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// The expression explainer
    Expression,
    /// The semantic rule analyzer
    Rules,
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expression => "expression",
            Self::Rules => "rules",
        }
    }

    /// Heading shown above the panel
    pub fn title(&self) -> &'static str {
        match self {
            Self::Expression => "Expression Evaluator",
            Self::Rules => "SDT Rules Analyzer",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown panel name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown panel '{0}' (expected 'expression' or 'rules')")]
pub struct UnknownPanel(pub String);

impl FromStr for Panel {
    type Err = UnknownPanel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expression" | "expr" | "e" => Ok(Self::Expression),
            "rules" | "rule" | "r" => Ok(Self::Rules),
            _ => Err(UnknownPanel(s.to_string())),
        }
    }
}
