//! GitHub API data transfer objects
//!
//! These types mirror the JSON returned by the user search, user detail and
//! user repository endpoints. Optional fields default so a sparse response
//! still decodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as returned by `GET /search/users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Numeric GitHub user ID
    pub id: u64,

    /// Login name, the identity key of a user
    pub login: String,

    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: String,

    /// Profile page on the web
    #[serde(default)]
    pub html_url: String,

    /// Company, only present when the API includes it
    #[serde(default)]
    pub company: Option<String>,

    /// Blog/website, only present when the API includes it
    #[serde(default)]
    pub blog: Option<String>,
}

/// One page of `GET /search/users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Total number of matching users across all pages
    pub total_count: u64,

    /// Whether GitHub timed out before finding all matches
    #[serde(default)]
    pub incomplete_results: bool,

    /// Users on this page
    #[serde(default)]
    pub items: Vec<UserSummary>,
}

/// Extended profile as returned by `GET /users/{login}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Project the follower stats shown on a user card
    pub fn detail(&self) -> UserDetail {
        UserDetail {
            followers: self.followers,
            following: self.following,
        }
    }
}

/// Follower stats used to enrich a user card
///
/// The default value (all zeros) is what a failed fetch degrades to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    pub followers: u64,
    pub following: u64,
}

/// A repository as returned by `GET /users/{login}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    /// "public" or "private"; absent on some GitHub Enterprise versions
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Whether the repository is public (missing visibility counts as public)
    pub fn is_public(&self) -> bool {
        self.visibility
            .as_deref()
            .map(|v| v.eq_ignore_ascii_case("public"))
            .unwrap_or(true)
    }
}
