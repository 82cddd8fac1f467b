//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubUserClient` trait using the octocrab
//! library. Requests go through octocrab's generic `get` so the responses
//! decode straight into this crate's DTOs.

use crate::client::{ClientConfig, GitHubUserClient, RepoSort};
use crate::error::ApiError;
use crate::types::{Repository, SearchPage, UserProfile};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// Query string of `GET /search/users`
#[derive(Debug, Serialize)]
struct SearchUsersParams<'a> {
    q: &'a str,
    per_page: u8,
    page: u32,
}

/// Query string of `GET /users/{login}/repos`
#[derive(Debug, Default, Serialize)]
struct UserReposParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<&'static str>,
}

impl From<RepoSort> for UserReposParams {
    fn from(sort: RepoSort) -> Self {
        match sort {
            RepoSort::ApiDefault => Self::default(),
            RepoSort::UpdatedDesc => Self {
                sort: Some("updated"),
                direction: Some("desc"),
            },
        }
    }
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabUserClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabUserClient {
    /// Build a client for the configured host and (optional) token
    ///
    /// Without a token the client sends unauthenticated requests.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Octocrab::builder()
            .base_uri(config.base_url.as_str())
            .map_err(|e| ApiError::Transport(format!("invalid base URL: {}", e)))?;

        if let Some(token) = config.token.as_ref() {
            builder = builder.personal_token(token.clone());
        }

        let octocrab = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build client: {}", e)))?;

        debug!("GitHub user client created for {}", config.base_url);
        Ok(Self::with_octocrab(Arc::new(octocrab)))
    }

    /// Wrap an existing octocrab instance
    pub fn with_octocrab(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl GitHubUserClient for OctocrabUserClient {
    async fn search_users(
        &self,
        query: &str,
        page: u32,
        per_page: u8,
    ) -> Result<SearchPage, ApiError> {
        debug!("Searching users q={:?} page={} per_page={}", query, page, per_page);

        let params = SearchUsersParams {
            q: query,
            per_page,
            page,
        };
        let result: SearchPage = self.octocrab.get("/search/users", Some(&params)).await?;

        debug!(
            "Search q={:?} page={} returned {} of {} users",
            query,
            page,
            result.items.len(),
            result.total_count
        );
        Ok(result)
    }

    async fn fetch_user(&self, login: &str) -> Result<UserProfile, ApiError> {
        debug!("Fetching user {}", login);
        let profile: UserProfile = self
            .octocrab
            .get(user_route(login), None::<&()>)
            .await?;
        Ok(profile)
    }

    async fn fetch_user_repos(
        &self,
        login: &str,
        sort: RepoSort,
    ) -> Result<Vec<Repository>, ApiError> {
        debug!("Fetching repos for {} ({:?})", login, sort);
        let params = UserReposParams::from(sort);
        let repos: Vec<Repository> = self
            .octocrab
            .get(format!("{}/repos", user_route(login)), Some(&params))
            .await?;

        debug!("Fetched {} repos for {}", repos.len(), login);
        Ok(repos)
    }
}

/// Route of a user resource with the login percent-encoded as one path segment
fn user_route(login: &str) -> String {
    format!("/users/{}", urlencoding::encode(login))
}
