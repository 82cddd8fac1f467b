//! Shared helpers for store-level tests
//!
//! `FakeClient` answers from scripted data, optionally after a delay, and
//! records every request so tests can assert on what went over the wire.

use crate::actions::{Action, GlobalAction};
use crate::middleware;
use crate::state::AppState;
use crate::store::Store;
use async_trait::async_trait;
use gh_user_client::{
    ApiError, GitHubUserClient, RepoSort, Repository, SearchPage, UserApi, UserProfile,
    UserSummary,
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;

pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// A request the fake client received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search { query: String, page: u32 },
    User(String),
    Repos(String),
}

#[derive(Default)]
pub struct FakeClient {
    /// Keyed by query and page; `None` answers any page
    searches: Mutex<HashMap<(String, Option<u32>), SearchPage>>,
    search_delays: Mutex<HashMap<String, Duration>>,
    users: Mutex<HashMap<String, UserProfile>>,
    user_delay: Mutex<Option<Duration>>,
    repos: Mutex<HashMap<String, Vec<Repository>>>,
    repo_delay: Mutex<Option<Duration>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every page of `query` with `logins`
    pub fn with_search(self, query: &str, total_count: u64, logins: &[&str]) -> Self {
        self.insert_search(query, None, total_count, logins);
        self
    }

    /// Answer one page of `query` with `logins`
    pub fn with_page(self, query: &str, page: u32, total_count: u64, logins: &[&str]) -> Self {
        self.insert_search(query, Some(page), total_count, logins);
        self
    }

    pub fn with_search_delay(self, query: &str, delay: Duration) -> Self {
        self.search_delays
            .lock()
            .unwrap()
            .insert(query.to_string(), delay);
        self
    }

    pub fn with_user(self, login: &str, followers: u64, following: u64) -> Self {
        self.users.lock().unwrap().insert(
            login.to_string(),
            UserProfile {
                login: login.to_string(),
                followers,
                following,
                ..UserProfile::default()
            },
        );
        self
    }

    pub fn with_user_delay(self, delay: Duration) -> Self {
        *self.user_delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn with_repos(self, login: &str, repos: Vec<Repository>) -> Self {
        self.repos.lock().unwrap().insert(login.to_string(), repos);
        self
    }

    pub fn with_repo_delay(self, delay: Duration) -> Self {
        *self.repo_delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<(String, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search { query, page } => Some((query, page)),
                _ => None,
            })
            .collect()
    }

    pub fn user_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::User(login) => Some(login),
                _ => None,
            })
            .collect()
    }

    fn insert_search(&self, query: &str, page: Option<u32>, total_count: u64, logins: &[&str]) {
        self.searches.lock().unwrap().insert(
            (query.to_string(), page),
            SearchPage {
                total_count,
                incomplete_results: false,
                items: logins.iter().map(|login| user(login)).collect(),
            },
        );
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GitHubUserClient for FakeClient {
    async fn search_users(
        &self,
        query: &str,
        page: u32,
        _per_page: u8,
    ) -> Result<SearchPage, ApiError> {
        self.record(Call::Search {
            query: query.to_string(),
            page,
        });

        let delay = self.search_delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let searches = self.searches.lock().unwrap();
        searches
            .get(&(query.to_string(), Some(page)))
            .or_else(|| searches.get(&(query.to_string(), None)))
            .cloned()
            .ok_or_else(|| ApiError::Transport(format!("no scripted search for {}", query)))
    }

    async fn fetch_user(&self, login: &str) -> Result<UserProfile, ApiError> {
        self.record(Call::User(login.to_string()));

        let delay = *self.user_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.users
            .lock()
            .unwrap()
            .get(login)
            .cloned()
            .ok_or_else(|| ApiError::Transport("Not Found".to_string()))
    }

    async fn fetch_user_repos(
        &self,
        login: &str,
        _sort: RepoSort,
    ) -> Result<Vec<Repository>, ApiError> {
        self.record(Call::Repos(login.to_string()));

        let delay = *self.repo_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        Ok(self
            .repos
            .lock()
            .unwrap()
            .get(login)
            .cloned()
            .unwrap_or_default())
    }
}

pub fn user(login: &str) -> UserSummary {
    UserSummary {
        id: 0,
        login: login.to_string(),
        avatar_url: String::new(),
        html_url: format!("https://github.com/{}", login),
        company: None,
        blog: None,
    }
}

pub fn repo(id: u64, name: &str, language: Option<&str>) -> Repository {
    Repository {
        id,
        name: name.to_string(),
        html_url: format!("https://github.com/octocat/{}", name),
        description: None,
        language: language.map(str::to_string),
        stargazers_count: id * 10,
        forks_count: id,
        visibility: Some("public".to_string()),
        updated_at: None,
    }
}

/// Store wired like the application, on the current tokio runtime
pub fn test_store(client: Arc<FakeClient>) -> Store {
    let api = UserApi::new(client);
    let mut store = Store::new(AppState::default());
    for m in middleware::default_chain(api, Handle::current(), DEBOUNCE) {
        store.add_middleware(m);
    }
    store
}

/// Let spawned tasks run and process what they sent, without advancing time
pub async fn settle(store: &mut Store) {
    loop {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
        if store.process_pending() == 0 {
            break;
        }
    }
}

pub fn press(store: &mut Store, code: KeyCode) {
    press_with(store, code, KeyModifiers::NONE);
}

pub fn press_with(store: &mut Store, code: KeyCode, modifiers: KeyModifiers) {
    store.dispatch(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
        code, modifiers,
    ))));
}

pub fn type_text(store: &mut Store, text: &str) {
    for c in text.chars() {
        press(store, KeyCode::Char(c));
    }
}

pub fn logins(state: &AppState) -> Vec<String> {
    state.search.users.iter().map(|u| u.login.clone()).collect()
}
