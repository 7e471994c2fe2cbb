//! Transient status messages
//!
//! A posted message is fully shown for the configured duration, then fades
//! out, then expires. Time is always passed in so the board is
//! deterministic under test.

use std::time::{Duration, Instant};

/// Message category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageKind {
    #[default]
    Info,
    Error,
}

impl MessageKind {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A status message and when it was posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
    pub posted_at: Instant,
}

/// Visibility of a message at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePhase {
    Shown,
    FadingOut,
    Expired,
}

/// Currently posted messages, oldest first
#[derive(Debug, Clone)]
pub struct MessageBoard {
    duration: Duration,
    fade: Duration,
    messages: Vec<Message>,
}

impl MessageBoard {
    pub fn new(duration: Duration, fade: Duration) -> Self {
        Self {
            duration,
            fade,
            messages: Vec::new(),
        }
    }

    /// Post a message and return a copy of it
    pub fn post(&mut self, kind: MessageKind, text: impl Into<String>, now: Instant) -> Message {
        let message = Message {
            kind,
            text: text.into(),
            posted_at: now,
        };
        self.messages.push(message.clone());
        message
    }

    pub fn phase(&self, message: &Message, now: Instant) -> MessagePhase {
        let age = now.saturating_duration_since(message.posted_at);
        if age < self.duration {
            MessagePhase::Shown
        } else if age < self.duration + self.fade {
            MessagePhase::FadingOut
        } else {
            MessagePhase::Expired
        }
    }

    /// Drop expired messages
    pub fn prune(&mut self, now: Instant) {
        let (duration, fade) = (self.duration, self.fade);
        self.messages
            .retain(|m| now.saturating_duration_since(m.posted_at) < duration + fade);
    }

    /// Prune, then list what is still visible with its phase
    pub fn active(&mut self, now: Instant) -> Vec<(&Message, MessagePhase)> {
        self.prune(now);
        self.messages
            .iter()
            .map(|m| (m, self.phase(m, now)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
