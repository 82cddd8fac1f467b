//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Emoji/icon for the status
    pub emoji: &'static str,
    /// The message text
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// Component that reported the message
    pub source: String,
    /// Foreground style (color based on kind)
    pub message_style: Style,
    /// Background color for the bar
    pub bg_color: Color,
    /// Style for metadata (timestamp, source)
    pub metadata_style: Style,
    /// Key hints on the right ("Enter search  Tab results ...")
    pub hints: &'static str,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let hints = if state.modal.is_open() {
            "↑↓ select  Enter open  Esc close"
        } else {
            "Enter search  Tab results  PgUp/PgDn page  Ctrl+C quit"
        };

        if let Some(msg) = state.status_bar.latest() {
            let fg_color = match msg.kind {
                StatusKind::Running => theme.status_warning,
                StatusKind::Success => theme.status_success,
                StatusKind::Error => theme.status_error,
                StatusKind::Info => theme.status_info,
            };

            Self {
                emoji: msg.kind.emoji(),
                message: msg.message.clone(),
                timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                source: msg.source.to_string(),
                message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                bg_color: theme.bg_primary,
                metadata_style: Style::default().fg(theme.text_muted),
                hints,
            }
        } else {
            // Welcome message when no status messages
            Self {
                emoji: "👋",
                message: "Search GitHub users".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style: Style::default().fg(theme.text_muted),
                hints,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StatusMessage, StatusSource};

    #[test]
    fn test_welcome_then_latest_message() {
        let mut state = AppState::default();
        assert_eq!(StatusBarViewModel::from_state(&state).message, "Search GitHub users");

        state.status_bar.record(StatusMessage::new(
            StatusKind::Error,
            "Search failed: timeout",
            StatusSource::Search,
        ));
        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "Search failed: timeout");
        assert_eq!(vm.emoji, "🚨");
        assert_eq!(vm.source, "search");
    }
}
