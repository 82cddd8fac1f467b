use crate::actions::{Action, GlobalAction, ModalAction};
use crate::reducers::{
    modal_reducer::reduce_modal, search_reducer::reduce_search,
    status_bar_reducer::reduce_status_bar,
};
use crate::state::AppState;
use crate::views::{RepositoryModalView, ViewId};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions and view stack changes first
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::Close) => {
            if top_view_is(&state, ViewId::RepositoryModal) {
                return reduce(state, &Action::Modal(ModalAction::Close));
            }
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
            return state;
        }
        Action::Modal(ModalAction::Opened { .. }) => {
            if !top_view_is(&state, ViewId::RepositoryModal) {
                log::debug!("Pushing view onto stack: {:?}", ViewId::RepositoryModal);
                state.view_stack.push(Box::new(RepositoryModalView::new()));
            }
        }
        Action::Modal(ModalAction::Close) => {
            if top_view_is(&state, ViewId::RepositoryModal) {
                state.view_stack.pop();
            }
        }
        _ => {}
    }

    // Run sub-reducers for screen-specific actions
    match action {
        Action::Search(search_action) => {
            state.search = reduce_search(state.search, search_action);
        }
        Action::Modal(modal_action) => {
            state.modal = reduce_modal(state.modal, modal_action);
        }
        Action::StatusBar(status_action) => {
            state.status_bar = reduce_status_bar(state.status_bar, status_action);
        }
        _ => {}
    }

    state
}

fn top_view_is(state: &AppState, id: ViewId) -> bool {
    state.active_view().map(|v| v.view_id()) == Some(id)
}
