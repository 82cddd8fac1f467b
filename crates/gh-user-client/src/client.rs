//! GitHub user client trait and connection settings
//!
//! This module defines the `GitHubUserClient` trait that all client
//! implementations satisfy, plus the explicit configuration handed to a
//! client at construction time.

use crate::error::ApiError;
use crate::types::{Repository, SearchPage, UserProfile};
use crate::DEFAULT_BASE_URL;
use async_trait::async_trait;

/// Connection settings for a client
///
/// Passed to the client constructor; there is no ambient global
/// configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, e.g. `https://api.github.com` or `https://ghe.example.com/api/v3`
    pub base_url: String,

    /// Opaque bearer token. `None` means unauthenticated (rate-limited) requests.
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Ordering of a user's repository list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepoSort {
    /// Whatever order the API returns (full name)
    ApiDefault,

    /// Most recently updated first (`sort=updated&direction=desc`)
    #[default]
    UpdatedDesc,
}

/// GitHub API client trait
///
/// Implementations report every failure as an [`ApiError`]; the
/// failure-tolerant behaviour lives one layer up in [`crate::UserApi`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks.
#[async_trait]
pub trait GitHubUserClient: Send + Sync {
    /// Search users (`GET /search/users`)
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search query
    /// * `page` - 1-based page number
    /// * `per_page` - Page size
    async fn search_users(
        &self,
        query: &str,
        page: u32,
        per_page: u8,
    ) -> Result<SearchPage, ApiError>;

    /// Fetch a user's profile (`GET /users/{login}`)
    async fn fetch_user(&self, login: &str) -> Result<UserProfile, ApiError>;

    /// Fetch a user's public repositories (`GET /users/{login}/repos`)
    async fn fetch_user_repos(
        &self,
        login: &str,
        sort: RepoSort,
    ) -> Result<Vec<Repository>, ApiError>;
}
