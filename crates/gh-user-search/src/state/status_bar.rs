//! Status Bar State
//!
//! Feedback lines of background operations, newest last. Every source keeps
//! at most one "running" line: whatever it reports next replaces it, so a
//! finished search reads "Found 13 users" rather than leaving "Searching..."
//! behind in the history.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use strum::Display;

/// Lines kept before the oldest is dropped
const HISTORY_LIMIT: usize = 20;

/// Operation that reported a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatusSource {
    Search,
    Repositories,
    Browser,
}

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Running,
    Success,
    Error,
    Info,
}

impl StatusKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Info => "ℹ️",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    pub source: StatusSource,
}

impl StatusMessage {
    /// Message stamped with the current local time
    pub fn new(kind: StatusKind, message: impl Into<String>, source: StatusSource) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    messages: VecDeque<StatusMessage>,
}

impl StatusBarState {
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// History, oldest first
    pub fn history(&self) -> impl Iterator<Item = &StatusMessage> {
        self.messages.iter()
    }

    /// Record a line, superseding the running line of the same source
    pub fn record(&mut self, message: StatusMessage) {
        if let Some(index) = self.running_line(message.source) {
            self.messages.remove(index);
        }
        self.messages.push_back(message);
        if self.messages.len() > HISTORY_LIMIT {
            self.messages.pop_front();
        }
    }

    fn running_line(&self, source: StatusSource) -> Option<usize> {
        self.messages
            .iter()
            .rposition(|m| m.source == source && m.kind == StatusKind::Running)
    }
}
