//! Search Reducer
//!
//! Applies query edits, search results and enrichment to `SearchState`.
//! Results are only applied for the active generation; details only for the
//! current result set.

use crate::actions::{GridMove, SearchAction};
use crate::state::{DetailEntry, SearchFocus, SearchState, GRID_COLUMNS};

/// Reduce search state
pub fn reduce_search(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::InputChar(c) => {
            state.query.push(*c);
            state.validation_error = None;
        }
        SearchAction::InputBackspace => {
            state.query.pop();
            state.validation_error = None;
            if state.query.is_empty() {
                state.reset_results();
            }
        }
        SearchAction::Clear => {
            state.query.clear();
            state.validation_error = None;
            state.focus = SearchFocus::Input;
            state.reset_results();
        }
        SearchAction::FocusGrid => {
            if !state.users.is_empty() {
                state.focus = SearchFocus::Grid;
            }
        }
        SearchAction::FocusInput => {
            state.focus = SearchFocus::Input;
        }
        SearchAction::Started {
            generation,
            query,
            page,
            result_set,
        } => {
            if *result_set != state.result_set {
                log::debug!(
                    "New result set {} for {:?}, dropping {} detail entries",
                    result_set,
                    query,
                    state.details.len()
                );
                state.details.clear();
                state.result_set = *result_set;
            }
            state.active_generation = Some(*generation);
            state.executed_query = Some(query.clone());
            state.pagination.page = *page;
            state.loading = true;
            state.validation_error = None;
        }
        SearchAction::Loaded {
            generation,
            outcome,
        } => {
            if state.active_generation != Some(*generation) {
                log::debug!(
                    "Ignoring search result of generation {} (active: {:?})",
                    generation,
                    state.active_generation
                );
                return state;
            }
            state.users = outcome.users.clone();
            state.pagination.total_count = outcome.total_count;
            // Only a failed search lands here out of range; a shrunken result
            // is reloaded by the middleware before it is applied
            state.pagination.page = state.pagination.clamp(state.pagination.page);
            state.loading = false;
            state.active_generation = None;
            state.selected = 0;
            if state.users.is_empty() {
                state.focus = SearchFocus::Input;
            }
        }
        SearchAction::ValidationFailed(error) => {
            state.validation_error = Some(*error);
        }
        SearchAction::MoveSelection(direction) => {
            state.selected = move_selection(state.selected, state.users.len(), *direction);
        }
        SearchAction::DetailsRequested { result_set, logins } => {
            if *result_set == state.result_set {
                for login in logins {
                    state
                        .details
                        .entry(login.clone())
                        .or_insert(DetailEntry::Pending);
                }
            }
        }
        SearchAction::DetailLoaded {
            result_set,
            login,
            detail,
        } => {
            if *result_set == state.result_set {
                state.details.insert(login.clone(), DetailEntry::Ready(*detail));
            } else {
                log::debug!("Dropping detail for {} from result set {}", login, result_set);
            }
        }
        // Handled by middleware
        SearchAction::Submit
        | SearchAction::DebounceElapsed { .. }
        | SearchAction::PreviousPage
        | SearchAction::NextPage => {}
    }
    state
}

/// New card index after moving in a grid of `len` cards
fn move_selection(selected: usize, len: usize, direction: GridMove) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    match direction {
        GridMove::Left => selected.saturating_sub(1),
        GridMove::Right => (selected + 1).min(last),
        GridMove::Up if selected >= GRID_COLUMNS => selected - GRID_COLUMNS,
        GridMove::Down if selected + GRID_COLUMNS <= last => selected + GRID_COLUMNS,
        GridMove::Up | GridMove::Down => selected,
    }
}
