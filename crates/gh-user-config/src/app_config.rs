//! Application configuration
//!
//! Loaded from a TOML file (see [`crate::load_config_file`]) and then
//! overridden by environment variables. A missing or broken file never
//! fails startup; the defaults talk to the public API without a token.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "GITHUB_URL";
/// Environment variables providing the token, first non-empty wins
pub const ENV_TOKENS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub repositories: RepositoriesConfig,
}

/// Where and how to reach the GitHub API
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// REST API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token; absent means unauthenticated requests
    #[serde(default)]
    pub token: Option<String>,
}

/// Search input behaviour
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Repository modal behaviour
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RepositoriesConfig {
    /// List most recently updated repositories first
    #[serde(default = "default_sort_by_updated")]
    pub sort_by_updated: bool,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_sort_by_updated() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    /// Debounce period as a `Duration`
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for RepositoriesConfig {
    fn default() -> Self {
        Self {
            sort_by_updated: default_sort_by_updated(),
        }
    }
}

impl AppConfig {
    /// Load `.env`, then the config file, then apply environment overrides
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Failed to load .env file: {}", e),
        }

        let mut config = Self::from_file_content(crate::load_config_file().as_deref());
        config.apply_env(|key| std::env::var(key).ok());

        log::info!("Using API at {}", config.api.base_url);
        if config.api.token.is_none() {
            log::warn!("No GitHub token configured, requests are unauthenticated and rate-limited");
        }
        config
    }

    /// Parse config file content, falling back to defaults
    pub fn from_file_content(content: Option<&str>) -> Self {
        if let Some(content) = content {
            match toml::from_str(content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Override API settings from environment variables
    ///
    /// `lookup` abstracts `std::env::var` so the precedence can be tested.
    /// Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api.base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(token) = ENV_TOKENS.iter().find_map(|key| non_empty(key)) {
            self.api.token = Some(token.trim().to_string());
        }

        if self.api.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.api.token = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "https://api.github.com");
        assert_eq!(config.api.token, None);
        assert_eq!(config.search.debounce(), Duration::from_millis(500));
        assert!(config.repositories.sort_by_updated);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            [search]
            debounce_ms = 250
        "#;
        let config = AppConfig::from_file_content(Some(toml));
        assert_eq!(config.search.debounce_ms, 250);
        // Other sections should use defaults
        assert_eq!(config.api, ApiConfig::default());
        assert!(config.repositories.sort_by_updated);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let config = AppConfig::from_file_content(Some("this is = = not toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = AppConfig::from_file_content(Some(
            r#"
            [api]
            base_url = "https://from-file"
            token = "file-token"
        "#,
        ));
        config.apply_env(env(&[
            ("GITHUB_URL", "https://ghe.example.com/api/v3/"),
            ("GITHUB_TOKEN", "env-token"),
        ]));

        assert_eq!(config.api.base_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.api.token.as_deref(), Some("env-token"));
    }

    #[test]
    fn test_gh_token_fallback_and_empty_values() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[("GITHUB_TOKEN", ""), ("GH_TOKEN", "gh-token")]));
        assert_eq!(config.api.token.as_deref(), Some("gh-token"));

        let mut config = AppConfig::default();
        config.apply_env(env(&[("GITHUB_URL", "  "), ("GITHUB_TOKEN", "")]));
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_blank_file_token_is_unauthenticated() {
        let mut config = AppConfig::from_file_content(Some(
            r#"
            [api]
            token = ""
        "#,
        ));
        config.apply_env(env(&[]));
        assert_eq!(config.api.token, None);
    }

    #[test]
    fn test_api_config_debug_redacts_token() {
        let config = ApiConfig {
            token: Some("secret".to_string()),
            ..ApiConfig::default()
        };
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
