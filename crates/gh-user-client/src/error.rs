//! API error taxonomy

use thiserror::Error;

/// Failure of a single GitHub API call
///
/// Callers treat both kinds the same way; the kind only shows up in the
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network, DNS, TLS, timeout or a non-success HTTP status
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<octocrab::Error> for ApiError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::Serde { source, .. } => Self::Decode(source.to_string()),
            octocrab::Error::Json { source, .. } => Self::Decode(source.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
