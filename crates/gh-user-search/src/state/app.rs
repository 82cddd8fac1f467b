//! Application State

use crate::theme::Theme;
use crate::views::{SearchView, View};

use super::{ModalState, SearchState, StatusBarState};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the search screen, the modal floats on top
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub search: SearchState,
    pub modal: ModalState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
}

impl AppState {
    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("search", &self.search)
            .field("modal", &self.modal)
            .field("status_bar", &self.status_bar)
            .field("theme", &"<theme>")
            .finish()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(SearchView::new())],
            search: SearchState::default(),
            modal: ModalState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
        }
    }
}
