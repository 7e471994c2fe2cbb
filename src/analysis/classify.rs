//! Per-rule classification

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Marker for an inherited-attribute assignment: `.i`, optional space, `=`
static INHERITED_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.i\s*=").expect("inherited-attribute pattern is valid"));

/// Attribute class of a semantic rule or rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attribution {
    /// Only synthesized attributes; values flow bottom-up
    #[default]
    SAttributed,
    /// Uses inherited attributes; values flow from parent or left siblings
    LAttributed,
}

impl Attribution {
    /// Check if this is the S-attributed class
    pub fn is_s_attributed(&self) -> bool {
        matches!(self, Self::SAttributed)
    }

    /// Short label for a single rule
    pub fn label(&self) -> &'static str {
        match self {
            Self::SAttributed => "S-Attributed",
            Self::LAttributed => "L-Attributed",
        }
    }

    /// Why a rule received this class
    pub fn rationale(&self) -> &'static str {
        match self {
            Self::SAttributed => {
                "This rule contains only synthesized attributes, making it S-attributed."
            }
            Self::LAttributed => {
                "This rule contains inherited attributes (.i), making it L-attributed rather than S-attributed."
            }
        }
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify one semantic rule
pub fn classify_rule(rule: &str) -> Attribution {
    if INHERITED_ASSIGNMENT.is_match(rule) {
        Attribution::LAttributed
    } else {
        Attribution::SAttributed
    }
}
