//! Status Bar Actions
//!
//! User feedback for background operations.

use crate::state::{StatusKind, StatusSource};

/// Actions for the status bar
#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Record a status line for `source`
    Push {
        kind: StatusKind,
        message: String,
        source: StatusSource,
    },
}

impl StatusBarAction {
    /// An operation of `source` has started
    pub fn running(message: impl Into<String>, source: StatusSource) -> Self {
        Self::push(StatusKind::Running, message, source)
    }

    pub fn success(message: impl Into<String>, source: StatusSource) -> Self {
        Self::push(StatusKind::Success, message, source)
    }

    pub fn error(message: impl Into<String>, source: StatusSource) -> Self {
        Self::push(StatusKind::Error, message, source)
    }

    pub fn info(message: impl Into<String>, source: StatusSource) -> Self {
        Self::push(StatusKind::Info, message, source)
    }

    fn push(kind: StatusKind, message: impl Into<String>, source: StatusSource) -> Self {
        Self::Push {
            kind,
            message: message.into(),
            source,
        }
    }
}
