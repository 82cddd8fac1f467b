//! Search Middleware
//!
//! Owns the query controller's side effects:
//! - debouncing edits of the query field
//! - validating explicit submissions
//! - paging through the current result set
//! - issuing generation-tagged searches
//!
//! Typing and Enter share one executor: Enter flushes the pending debounce and
//! searches right away. Every search gets a fresh generation and the reducer
//! applies only the result of the latest one.

use crate::actions::{Action, SearchAction, StatusBarAction};
use crate::debounce::Debouncer;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{validate_query, AppState, Pagination, StatusSource};
use gh_user_client::UserApi;
use std::time::Duration;
use tokio::runtime::Handle;

pub struct SearchMiddleware {
    api: UserApi,
    runtime: Handle,
    debouncer: Debouncer,
    /// Last issued search generation
    generation: u64,
    /// Last issued result set; a new query text starts a new one
    result_set: u64,
}

impl SearchMiddleware {
    pub fn new(api: UserApi, runtime: Handle, debounce: Duration) -> Self {
        Self {
            api,
            runtime,
            debouncer: Debouncer::new(debounce),
            generation: 0,
            result_set: 0,
        }
    }

    fn schedule_search(&mut self, dispatcher: &Dispatcher) {
        let dispatcher = dispatcher.clone();
        let ticket = self.debouncer.schedule(&self.runtime, move |ticket| {
            dispatcher.dispatch(Action::Search(SearchAction::DebounceElapsed { ticket }));
        });
        log::trace!(
            "Search debounce ticket {} scheduled in {:?}",
            ticket,
            self.debouncer.delay()
        );
    }

    /// Last page that still exists under `total_count`, if the current page
    /// no longer does
    fn refit_page(&self, state: &AppState, total_count: u64) -> Option<u32> {
        let requested = state.search.pagination.page;
        let fitted = Pagination {
            page: requested,
            total_count,
        }
        .clamp(requested);
        (fitted != requested).then_some(fitted)
    }

    /// Issue a search for `(query, page)` under a new generation
    fn execute(&mut self, query: String, page: u32, state: &AppState, dispatcher: &Dispatcher) {
        if state.search.executed_query.as_deref() != Some(query.as_str()) {
            self.result_set += 1;
        }
        self.generation += 1;
        let generation = self.generation;

        log::info!(
            "Searching users q={:?} page={} (generation {})",
            query,
            page,
            generation
        );
        dispatcher.dispatch(Action::Search(SearchAction::Started {
            generation,
            query: query.clone(),
            page,
            result_set: self.result_set,
        }));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Searching \"{}\" (page {})", query, page),
            StatusSource::Search,
        )));

        let api = self.api.clone();
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let outcome = api.search_users(&query, page).await;
            dispatcher.dispatch(Action::Search(SearchAction::Loaded {
                generation,
                outcome,
            }));
        });
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Search(search_action) = action else {
            return true;
        };

        match search_action {
            SearchAction::InputChar(_) => {
                self.schedule_search(dispatcher);
                true
            }
            SearchAction::InputBackspace => {
                // Removing the last character clears instead of searching
                if state.search.query.chars().count() <= 1 {
                    self.debouncer.cancel();
                } else {
                    self.schedule_search(dispatcher);
                }
                true
            }
            SearchAction::Clear => {
                if self.debouncer.cancel() {
                    log::debug!("Pending search cancelled by clear");
                }
                true
            }
            SearchAction::DebounceElapsed { ticket } => {
                if !self.debouncer.accept(*ticket) {
                    log::debug!("Ignoring superseded debounce ticket {}", ticket);
                    return false;
                }
                // Silent on empty input; validation messages are for Enter only
                if let Ok(query) = validate_query(&state.search.query) {
                    self.execute(query, 1, state, dispatcher);
                }
                false
            }
            SearchAction::Submit => {
                match validate_query(&state.search.query) {
                    Ok(query) => {
                        self.debouncer.cancel();
                        self.execute(query, 1, state, dispatcher);
                    }
                    Err(e) => {
                        log::debug!("Rejected submission: {}", e);
                        dispatcher.dispatch(Action::Search(SearchAction::ValidationFailed(e)));
                    }
                }
                false
            }
            SearchAction::PreviousPage | SearchAction::NextPage => {
                let Some(query) = state.search.executed_query.clone() else {
                    return false;
                };
                let target = if matches!(search_action, SearchAction::NextPage) {
                    state.search.pagination.next_page()
                } else {
                    state.search.pagination.previous_page()
                };
                if let Some(page) = target {
                    self.execute(query, page, state, dispatcher);
                }
                false
            }
            SearchAction::Loaded {
                generation,
                outcome,
            } => {
                if state.search.active_generation != Some(*generation) {
                    log::debug!("Discarding stale search response (generation {})", generation);
                    return false;
                }
                if outcome.error.is_none() {
                    if let Some(page) = self.refit_page(state, outcome.total_count) {
                        if let Some(query) = state.search.executed_query.clone() {
                            log::info!(
                                "Result count shrank to {}, reloading page {}",
                                outcome.total_count,
                                page
                            );
                            self.execute(query, page, state, dispatcher);
                            return false;
                        }
                    }
                }
                let status = match &outcome.error {
                    Some(e) => {
                        StatusBarAction::error(format!("Search failed: {}", e), StatusSource::Search)
                    }
                    None if outcome.users.is_empty() => {
                        StatusBarAction::info("No users found", StatusSource::Search)
                    }
                    None => StatusBarAction::success(
                        format!("Found {} users", outcome.total_count),
                        StatusSource::Search,
                    ),
                };
                dispatcher.dispatch(Action::StatusBar(status));
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{Pagination, ValidationError};
    use crate::test_support::*;
    use pretty_assertions::assert_eq;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_typing_issues_one_search_after_quiet_period() {
        let client = Arc::new(FakeClient::new().with_search("oct", 1, &["octocat"]));
        let mut store = test_store(client.clone());

        for c in "oct".chars() {
            type_text(&mut store, &c.to_string());
            tokio::time::sleep(Duration::from_millis(100)).await;
            settle(&mut store).await;
        }
        assert!(client.search_calls().is_empty());

        // 100ms already passed since the last key
        tokio::time::sleep(Duration::from_millis(399)).await;
        settle(&mut store).await;
        assert!(client.search_calls().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        settle(&mut store).await;
        assert_eq!(client.search_calls(), vec![("oct".to_string(), 1)]);
        assert_eq!(logins(store.state()), vec!["octocat"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_flushes_pending_debounce() {
        let client = Arc::new(FakeClient::new().with_search("octo", 1, &["octocat"]));
        let mut store = test_store(client.clone());

        type_text(&mut store, "octo");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;
        assert_eq!(client.search_calls(), vec![("octo".to_string(), 1)]);

        // The timer scheduled by typing must not search a second time
        tokio::time::sleep(Duration::from_secs(2)).await;
        settle(&mut store).await;
        assert_eq!(client.search_calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_submission_shows_error_without_request() {
        let client = Arc::new(FakeClient::new());
        let mut store = test_store(client.clone());

        type_text(&mut store, "   ");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;

        assert_eq!(
            store.state().search.validation_error,
            Some(ValidationError::EmptyQuery)
        );
        assert!(client.calls().is_empty());

        // Whitespace after the debounce is not searched either
        tokio::time::sleep(Duration::from_secs(1)).await;
        settle(&mut store).await;
        assert!(client.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_trims_query() {
        let client = Arc::new(FakeClient::new().with_search("octocat", 1, &["octocat"]));
        let mut store = test_store(client.clone());

        type_text(&mut store, "  octocat ");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;

        assert_eq!(client.search_calls(), vec![("octocat".to_string(), 1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_response_of_superseded_search_is_ignored() {
        let client = Arc::new(
            FakeClient::new()
                .with_search("oct", 1, &["slow-result"])
                .with_search_delay("oct", Duration::from_millis(300))
                .with_search("octocat", 1, &["octocat"]),
        );
        let mut store = test_store(client.clone());

        type_text(&mut store, "oct");
        press(&mut store, KeyCode::Enter);
        type_text(&mut store, "ocat");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;
        assert_eq!(logins(store.state()), vec!["octocat"]);

        tokio::time::sleep(Duration::from_millis(400)).await;
        settle(&mut store).await;

        assert_eq!(logins(store.state()), vec!["octocat"]);
        assert_eq!(store.state().search.executed_query.as_deref(), Some("octocat"));
        assert_eq!(client.search_calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paging_clamps_to_available_pages() {
        let client = Arc::new(FakeClient::new().with_search("rust", 13, &["a", "b"]));
        let mut store = test_store(client.clone());

        type_text(&mut store, "rust");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;
        assert_eq!(store.state().search.pagination.label(), "Page 1 of 3");

        // Previous on the first page does nothing
        press(&mut store, KeyCode::PageUp);
        settle(&mut store).await;

        for _ in 0..3 {
            press(&mut store, KeyCode::PageDown);
            settle(&mut store).await;
        }

        assert_eq!(
            client.search_calls(),
            vec![
                ("rust".to_string(), 1),
                ("rust".to_string(), 2),
                ("rust".to_string(), 3),
            ]
        );
        assert_eq!(
            store.state().search.pagination,
            Pagination {
                page: 3,
                total_count: 13
            }
        );
        assert_eq!(store.state().search.pagination.label(), "Page 3 of 3");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shrunken_total_reloads_last_existing_page() {
        let client = Arc::new(
            FakeClient::new()
                .with_page("rust", 1, 13, &["a", "b"])
                .with_page("rust", 2, 13, &["c", "d"])
                .with_page("rust", 3, 7, &[]),
        );
        let mut store = test_store(client.clone());

        type_text(&mut store, "rust");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;
        press(&mut store, KeyCode::Tab);
        for _ in 0..2 {
            press(&mut store, KeyCode::PageDown);
            settle(&mut store).await;
        }

        assert_eq!(
            client.search_calls(),
            vec![
                ("rust".to_string(), 1),
                ("rust".to_string(), 2),
                ("rust".to_string(), 3),
                ("rust".to_string(), 2),
            ]
        );
        let search = &store.state().search;
        assert_eq!(logins(store.state()), vec!["c", "d"]);
        assert_eq!(search.pagination.page, 2);
        assert!(!search.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paging_reuses_executed_query() {
        let client = Arc::new(
            FakeClient::new()
                .with_search("rust", 13, &["a"])
                .with_search("rusty", 1, &["b"]),
        );
        let mut store = test_store(client.clone());

        type_text(&mut store, "rust");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;

        // Edited but not yet searched
        type_text(&mut store, "y");
        press(&mut store, KeyCode::PageDown);
        settle(&mut store).await;

        assert_eq!(client.search_calls().last(), Some(&("rust".to_string(), 2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_pending_search_and_resets() {
        let client = Arc::new(FakeClient::new().with_search("ab", 8, &["a", "b"]));
        let mut store = test_store(client.clone());

        type_text(&mut store, "ab");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;
        assert_eq!(logins(store.state()), vec!["a", "b"]);

        type_text(&mut store, "c");
        press_with(&mut store, KeyCode::Char('u'), KeyModifiers::CONTROL);
        tokio::time::sleep(Duration::from_secs(1)).await;
        settle(&mut store).await;

        let search = &store.state().search;
        assert_eq!(search.query, "");
        assert!(search.users.is_empty());
        assert_eq!(search.pagination, Pagination::default());
        assert_eq!(client.search_calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backspacing_to_empty_clears_without_request() {
        let client = Arc::new(FakeClient::new().with_search("a", 1, &["a"]));
        let mut store = test_store(client.clone());

        type_text(&mut store, "a");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;

        press(&mut store, KeyCode::Backspace);
        tokio::time::sleep(Duration::from_secs(1)).await;
        settle(&mut store).await;

        assert!(store.state().search.users.is_empty());
        assert_eq!(client.search_calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_search_reports_status_and_empty_page() {
        let client = Arc::new(FakeClient::new());
        let mut store = test_store(client.clone());

        type_text(&mut store, "nobody");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;

        let state = store.state();
        assert!(state.search.users.is_empty());
        assert_eq!(state.search.pagination.label(), "Page 1 of 1");
        let latest = state.status_bar.latest().unwrap();
        assert!(latest.message.starts_with("Search failed"));
    }
}
