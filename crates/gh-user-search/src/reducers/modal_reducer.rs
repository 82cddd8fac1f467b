//! Modal Reducer
//!
//! Drives the repository modal state machine. Responses are applied only to
//! the session they were requested for.

use crate::actions::ModalAction;
use crate::state::{ModalPhase, ModalState};

/// Reduce modal state
pub fn reduce_modal(mut state: ModalState, action: &ModalAction) -> ModalState {
    match action {
        ModalAction::Opened { login, session } => {
            state = ModalState {
                phase: ModalPhase::OpenLoading {
                    login: login.clone(),
                    session: *session,
                },
                ..ModalState::default()
            };
        }
        ModalAction::ReposLoaded { session, repos } => {
            let login = match &state.phase {
                ModalPhase::OpenLoading {
                    login,
                    session: current,
                } if current == session => login.clone(),
                _ => {
                    log::debug!("Discarding repositories of modal session {}", session);
                    return state;
                }
            };
            state.phase = ModalPhase::OpenLoaded {
                login,
                session: *session,
                repos: repos.clone(),
            };
            state.selected = 0;
        }
        ModalAction::ProfileLoaded { session, profile } => {
            if state.session() == Some(*session) {
                state.profile = Some(profile.clone());
            } else {
                log::debug!("Discarding profile of modal session {}", session);
            }
        }
        ModalAction::Close => {
            state = ModalState::default();
        }
        ModalAction::SelectNext => {
            if state.selected + 1 < state.repos().len() {
                state.selected += 1;
            }
        }
        ModalAction::SelectPrevious => {
            state.selected = state.selected.saturating_sub(1);
        }
        // Handled by middleware
        ModalAction::Open { .. } => {}
    }
    state
}
