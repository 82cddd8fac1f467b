//! Actions module
//!
//! All actions in the application use a tagged action architecture:
//! - Generic actions (Navigation, TextInput, ViewContext) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular screen

// Shared action types
pub mod context_action;
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod modal;
pub mod search;
pub mod status_bar;

pub use context_action::ContextAction;
pub use global::GlobalAction;
pub use modal::ModalAction;
pub use navigation::NavigationAction;
pub use search::{GridMove, SearchAction};
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action - will be translated by active view
    ViewContext(ContextAction),

    // Global actions (no translation needed)
    Global(GlobalAction),

    // Screen-specific actions (already targeted)
    /// User search screen
    Search(SearchAction),
    /// Repository modal
    Modal(ModalAction),
    /// Status bar
    StatusBar(StatusBarAction),
}
