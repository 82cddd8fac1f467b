//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Close the current view; closing the last view quits
    Close,
    /// Quit the application
    Quit,
    /// Open a URL in the system browser
    OpenUrl(String),
}
