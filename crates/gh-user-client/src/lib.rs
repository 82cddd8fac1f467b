//! GitHub user search client
//!
//! This crate wraps the three read-only GitHub REST endpoints the user search
//! application needs. The design mirrors a decorator stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubUserClient trait             │
//! │  - search_users()                               │
//! │  - fetch_user()                                 │
//! │  - fetch_user_repos()                           │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────────┐     ┌─────────────────────┐
//! │ OctocrabUserClient  │◄────│ UserApi             │
//! │ (direct API)        │     │ (errors → defaults) │
//! └─────────────────────┘     └─────────────────────┘
//! ```
//!
//! The raw trait reports failures as [`ApiError`]. [`UserApi`] is what the
//! application talks to: it never fails and turns every error into an empty
//! or zero-valued result.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_user_client::{ClientConfig, OctocrabUserClient, UserApi};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), gh_user_client::ApiError> {
//! let client = OctocrabUserClient::new(&ClientConfig::default())?;
//! let api = UserApi::new(Arc::new(client));
//!
//! let outcome = api.search_users("octocat", 1).await;
//! println!("{} users of {}", outcome.users.len(), outcome.total_count);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod types;

/// Default GitHub REST API base URL (public GitHub)
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Number of users requested per search page
pub const PAGE_SIZE: u8 = 6;

/// GitHub only serves the first 1000 results of any search
pub const MAX_SEARCH_RESULTS: u64 = 1000;

pub use api::{SearchOutcome, UserApi};
pub use client::{ClientConfig, GitHubUserClient, RepoSort};
pub use error::ApiError;
pub use octocrab_client::OctocrabUserClient;
pub use types::{Repository, SearchPage, UserDetail, UserProfile, UserSummary};
