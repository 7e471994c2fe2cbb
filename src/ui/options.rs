//! Rendering and session options

use std::time::Duration;

/// Options for rendering result panels as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of spaces before each card body line
    pub indent: usize,
    /// Character repeated under each card title
    pub rule_char: char,
    /// Append the "Understanding the Results" card to rule reports
    pub show_guide: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            rule_char: '─',
            show_guide: true,
        }
    }
}

impl RenderOptions {
    /// Indentation string for card bodies
    pub fn indentation(&self) -> String {
        " ".repeat(self.indent)
    }
}

/// Session-wide settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long a transient message stays fully visible
    pub message_duration: Duration,
    /// Fade-out time after `message_duration`
    pub fade_duration: Duration,
    pub render: RenderOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            message_duration: Duration::from_millis(3000),
            fade_duration: Duration::from_millis(300),
            render: RenderOptions::default(),
        }
    }
}
