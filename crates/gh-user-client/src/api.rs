//! Failure-tolerant API facade
//!
//! `UserApi` decorates any [`GitHubUserClient`] and swallows errors at the
//! boundary: searches report the cause next to an empty result, detail and
//! repository lookups silently degrade to zero values. Nothing here returns
//! `Err` or panics, so callers only ever observe (possibly empty) data.

use crate::client::{GitHubUserClient, RepoSort};
use crate::error::ApiError;
use crate::types::{Repository, UserDetail, UserProfile, UserSummary};
use crate::PAGE_SIZE;
use log::{debug, warn};
use std::sync::Arc;

/// Result of a user search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Users on the requested page, at most `per_page` of them
    pub users: Vec<UserSummary>,
    /// Total number of matches reported by GitHub
    pub total_count: u64,
    /// Cause of failure; `None` on success
    pub error: Option<ApiError>,
}

impl SearchOutcome {
    /// Outcome of a failed search: no users, zero count, the cause
    pub fn failed(error: ApiError) -> Self {
        Self {
            users: Vec::new(),
            total_count: 0,
            error: Some(error),
        }
    }
}

/// Application-facing API: every operation is infallible
#[derive(Clone)]
pub struct UserApi {
    client: Arc<dyn GitHubUserClient>,
    per_page: u8,
    repo_sort: RepoSort,
}

impl UserApi {
    /// Wrap a client with the default page size and repository ordering
    pub fn new(client: Arc<dyn GitHubUserClient>) -> Self {
        Self {
            client,
            per_page: PAGE_SIZE,
            repo_sort: RepoSort::default(),
        }
    }

    /// Override the repository ordering
    pub fn with_repo_sort(mut self, repo_sort: RepoSort) -> Self {
        self.repo_sort = repo_sort;
        self
    }

    /// Search users; failures yield `([], 0, Some(error))`
    pub async fn search_users(&self, query: &str, page: u32) -> SearchOutcome {
        match self.client.search_users(query, page, self.per_page).await {
            Ok(result) => {
                let mut users = result.items;
                if users.len() > usize::from(self.per_page) {
                    debug!(
                        "Search returned {} users for a page of {}, truncating",
                        users.len(),
                        self.per_page
                    );
                    users.truncate(usize::from(self.per_page));
                }
                SearchOutcome {
                    users,
                    total_count: result.total_count,
                    error: None,
                }
            }
            Err(e) => {
                warn!("User search q={:?} page={} failed: {}", query, page, e);
                SearchOutcome::failed(e)
            }
        }
    }

    /// Follower stats for a user; failures yield zeros (logged, not surfaced)
    pub async fn user_detail(&self, login: &str) -> UserDetail {
        match self.client.fetch_user(login).await {
            Ok(profile) => profile.detail(),
            Err(e) => {
                warn!("Fetching details for {} failed: {}", login, e);
                UserDetail::default()
            }
        }
    }

    /// Extended profile for the modal header; failures yield `None`
    pub async fn user_profile(&self, login: &str) -> Option<UserProfile> {
        match self.client.fetch_user(login).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Fetching profile for {} failed: {}", login, e);
                None
            }
        }
    }

    /// Repositories of a user; failures yield an empty list
    pub async fn list_repos(&self, login: &str) -> Vec<Repository> {
        match self.client.fetch_user_repos(login, self.repo_sort).await {
            Ok(mut repos) => {
                if self.repo_sort == RepoSort::UpdatedDesc {
                    // The API already orders them; keep the order stable if it didn't
                    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
                }
                repos
            }
            Err(e) => {
                warn!("Fetching repos for {} failed: {}", login, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchPage;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    /// Client that answers every call with the same scripted result
    struct ScriptedClient {
        search: Result<SearchPage, ApiError>,
        user: Result<UserProfile, ApiError>,
        repos: Result<Vec<Repository>, ApiError>,
    }

    #[async_trait]
    impl GitHubUserClient for ScriptedClient {
        async fn search_users(&self, _: &str, _: u32, _: u8) -> Result<SearchPage, ApiError> {
            self.search.clone()
        }

        async fn fetch_user(&self, _: &str) -> Result<UserProfile, ApiError> {
            self.user.clone()
        }

        async fn fetch_user_repos(&self, _: &str, _: RepoSort) -> Result<Vec<Repository>, ApiError> {
            self.repos.clone()
        }
    }

    fn failing() -> ScriptedClient {
        ScriptedClient {
            search: Err(ApiError::Transport("Network Error".to_string())),
            user: Err(ApiError::Transport("Network Error".to_string())),
            repos: Err(ApiError::Decode("expected array".to_string())),
        }
    }

    fn user(id: u64, login: &str) -> UserSummary {
        UserSummary {
            id,
            login: login.to_string(),
            avatar_url: String::new(),
            html_url: String::new(),
            company: None,
            blog: None,
        }
    }

    fn repo(id: u64, day: u32) -> Repository {
        Repository {
            id,
            name: format!("repo-{}", id),
            html_url: String::new(),
            description: None,
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            visibility: None,
            updated_at: Some(Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_search_success() {
        let api = UserApi::new(Arc::new(ScriptedClient {
            search: Ok(SearchPage {
                total_count: 2,
                incomplete_results: false,
                items: vec![user(1, "user1"), user(2, "user2")],
            }),
            ..failing()
        }));

        let outcome = api.search_users("testquery", 1).await;

        assert_eq!(outcome.users, vec![user(1, "user1"), user(2, "user2")]);
        assert_eq!(outcome.total_count, 2);
        assert_eq!(outcome.error, None);
    }

    #[tokio::test]
    async fn test_search_failure_returns_empty_and_error() {
        let api = UserApi::new(Arc::new(failing()));

        let outcome = api.search_users("testquery", 1).await;

        assert_eq!(
            outcome,
            SearchOutcome::failed(ApiError::Transport("Network Error".to_string()))
        );
    }

    #[tokio::test]
    async fn test_search_never_exceeds_page_size() {
        let items = (1..=10).map(|i| user(i, &format!("u{}", i))).collect();
        let api = UserApi::new(Arc::new(ScriptedClient {
            search: Ok(SearchPage {
                total_count: 10,
                incomplete_results: false,
                items,
            }),
            ..failing()
        }));

        let outcome = api.search_users("u", 1).await;
        assert_eq!(outcome.users.len(), usize::from(PAGE_SIZE));
    }

    #[tokio::test]
    async fn test_user_detail_failure_is_zero() {
        let api = UserApi::new(Arc::new(failing()));
        assert_eq!(api.user_detail("ghost").await, UserDetail::default());
        assert_eq!(api.user_profile("ghost").await, None);
    }

    #[tokio::test]
    async fn test_user_detail_success() {
        let api = UserApi::new(Arc::new(ScriptedClient {
            user: Ok(UserProfile {
                login: "octocat".to_string(),
                followers: 10,
                following: 2,
                ..UserProfile::default()
            }),
            ..failing()
        }));

        assert_eq!(
            api.user_detail("octocat").await,
            UserDetail {
                followers: 10,
                following: 2
            }
        );
    }

    #[tokio::test]
    async fn test_list_repos_failure_is_empty() {
        let api = UserApi::new(Arc::new(failing()));
        assert!(api.list_repos("octocat").await.is_empty());
    }

    #[tokio::test]
    async fn test_list_repos_sorted_by_update_desc() {
        let api = UserApi::new(Arc::new(ScriptedClient {
            repos: Ok(vec![repo(1, 3), repo(2, 9), repo(3, 5)]),
            ..failing()
        }));

        let ids: Vec<u64> = api.list_repos("octocat").await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_list_repos_keeps_api_order_without_sort() {
        let api = UserApi::new(Arc::new(ScriptedClient {
            repos: Ok(vec![repo(1, 3), repo(2, 9), repo(3, 5)]),
            ..failing()
        }))
        .with_repo_sort(RepoSort::ApiDefault);

        let ids: Vec<u64> = api.list_repos("octocat").await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
