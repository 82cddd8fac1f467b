//! Text input actions - for views whose focus is a text field
//!
//! The active view translates these into its own action.

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Ctrl+U)
    ClearLine,
    /// Escape pressed - clears the field, or leaves when it is empty
    Escape,
    /// Enter pressed - submit
    Confirm,
    /// Tab or down arrow - move focus out of the field
    Leave,
}
