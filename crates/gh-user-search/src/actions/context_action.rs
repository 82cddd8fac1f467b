//! Context-sensitive actions
//!
//! Semantic actions that views interpret differently. `Confirm` (Enter) means:
//! - User grid: open the repository modal for the selected user
//! - Repository modal: open the selected repository in the browser

/// Semantic actions that views interpret differently.
///
/// Each view translates them via `translate_context_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on the focused item (Enter)
    Confirm,

    /// Open the focused item's web page (o)
    OpenInBrowser,

    /// Move focus back to the search field (Tab, /)
    FocusInput,
}
