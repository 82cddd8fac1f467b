use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::StatusBarViewModel;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

pub mod repository_modal_view;
pub mod search_view;
pub mod status_bar;

pub use repository_modal_view::RepositoryModalView;
pub use search_view::SearchView;
pub use status_bar::StatusBarWidget;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Search,
    RepositoryModal,
}

/// A screen or overlay on the view stack
///
/// Views are stored as `Box<dyn View>` inside `AppState`, so the trait stays
/// object-safe: no generic methods, `&self` receivers only, and `Send` because
/// the state is owned by the store.
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Boxed clone, since `Clone` itself is not object-safe
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    ///
    /// The default implementation returns None, indicating the view doesn't
    /// handle navigation.
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    fn translate_text_input(&self, _input: TextInputAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter, open in browser, focus input) using
    /// the view's current selection.
    fn translate_context_action(
        &self,
        _action: ContextAction,
        _state: &AppState,
    ) -> Option<Action> {
        None
    }
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views are drawn bottom-up so the modal ends up over the search screen.
/// The status bar takes the last line.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [main, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    for view in &state.view_stack {
        view.render(state, main, f);
    }

    let vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&vm), status);
}
