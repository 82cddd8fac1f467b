//! Enrichment Middleware
//!
//! Reconciles the visible users against the detail mapping whenever a search
//! result is applied, and fetches follower stats for the logins that are
//! missing. Logins are marked `Pending` before any fetch starts, so a login
//! is fetched at most once per result set.

use crate::actions::{Action, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{missing_logins, AppState};
use gh_user_client::{UserApi, UserSummary};
use tokio::runtime::Handle;

pub struct EnrichmentMiddleware {
    api: UserApi,
    runtime: Handle,
}

impl EnrichmentMiddleware {
    pub fn new(api: UserApi, runtime: Handle) -> Self {
        Self { api, runtime }
    }

    fn enrich(&self, users: &[UserSummary], state: &AppState, dispatcher: &Dispatcher) {
        let logins = missing_logins(users, &state.search.details);
        if logins.is_empty() {
            return;
        }

        let result_set = state.search.result_set;
        log::debug!(
            "Fetching details for {} users (result set {})",
            logins.len(),
            result_set
        );
        dispatcher.dispatch(Action::Search(SearchAction::DetailsRequested {
            result_set,
            logins: logins.clone(),
        }));

        for login in logins {
            let api = self.api.clone();
            let dispatcher = dispatcher.clone();
            self.runtime.spawn(async move {
                let detail = api.user_detail(&login).await;
                dispatcher.dispatch(Action::Search(SearchAction::DetailLoaded {
                    result_set,
                    login,
                    detail,
                }));
            });
        }
    }
}

impl Middleware for EnrichmentMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Search(SearchAction::Loaded {
            generation,
            outcome,
        }) = action
        {
            if state.search.active_generation == Some(*generation) {
                self.enrich(&outcome.users, state, dispatcher);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::state::DetailEntry;
    use crate::test_support::*;
    use gh_user_client::UserDetail;
    use pretty_assertions::assert_eq;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::Arc;
    use std::time::Duration;

    fn detail(followers: u64, following: u64) -> Option<UserDetail> {
        Some(UserDetail {
            followers,
            following,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_visible_users_are_enriched_once() {
        let client = Arc::new(
            FakeClient::new()
                .with_search("oct", 2, &["octocat", "octodog"])
                .with_user("octocat", 10, 2)
                .with_user("octodog", 3, 4),
        );
        let mut store = test_store(client.clone());

        type_text(&mut store, "oct");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;

        let search = &store.state().search;
        assert_eq!(search.detail_for("octocat"), detail(10, 2));
        assert_eq!(search.detail_for("octodog"), detail(3, 4));

        let mut calls = client.user_calls();
        calls.sort();
        assert_eq!(calls, vec!["octocat", "octodog"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_detail_fetch_degrades_to_zero() {
        let client = Arc::new(FakeClient::new().with_search("ghost", 1, &["ghost"]));
        let mut store = test_store(client.clone());

        type_text(&mut store, "ghost");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;

        assert_eq!(store.state().search.detail_for("ghost"), detail(0, 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_revisiting_a_page_does_not_refetch() {
        let client = Arc::new(
            FakeClient::new()
                .with_page("rust", 1, 12, &["a", "b"])
                .with_page("rust", 2, 12, &["c", "a"]),
        );
        let mut store = test_store(client.clone());

        type_text(&mut store, "rust");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;
        press(&mut store, KeyCode::PageDown);
        settle(&mut store).await;
        press(&mut store, KeyCode::PageUp);
        settle(&mut store).await;

        let mut calls = client.user_calls();
        calls.sort();
        assert_eq!(calls, vec!["a", "b", "c"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_logins_are_not_requested_twice() {
        let client = Arc::new(
            FakeClient::new()
                .with_page("rust", 1, 12, &["a", "b"])
                .with_page("rust", 2, 12, &["b", "c"])
                .with_user_delay(Duration::from_secs(1)),
        );
        let mut store = test_store(client.clone());

        type_text(&mut store, "rust");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;
        assert_eq!(
            store.state().search.details.get("b"),
            Some(&DetailEntry::Pending)
        );

        // "b" is still in flight when page 2 shows it again
        press(&mut store, KeyCode::PageDown);
        settle(&mut store).await;
        tokio::time::sleep(Duration::from_secs(2)).await;
        settle(&mut store).await;

        let mut calls = client.user_calls();
        calls.sort();
        assert_eq!(calls, vec!["a", "b", "c"]);
        assert!(store
            .state()
            .search
            .details
            .values()
            .all(|entry| matches!(entry, DetailEntry::Ready(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleared_query_fetches_details_again() {
        let client = Arc::new(
            FakeClient::new()
                .with_search("rust", 1, &["a"])
                .with_search("go", 1, &["a"]),
        );
        let mut store = test_store(client.clone());

        type_text(&mut store, "rust");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;

        press_with(&mut store, KeyCode::Char('u'), KeyModifiers::CONTROL);
        type_text(&mut store, "go");
        press(&mut store, KeyCode::Enter);
        settle(&mut store).await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        settle(&mut store).await;

        assert_eq!(client.user_calls(), vec!["a", "a"]);
        assert_eq!(store.state().search.details.len(), 1);
    }
}
