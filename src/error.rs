//! Error type shared by the session manager, request executor and mapper.

use thiserror::Error;

/// Errors surfaced by every query operation.
#[derive(Debug, Error)]
pub enum RedditClientError {
    /// Required credentials are missing or empty.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The token endpoint rejected the exchange.
    #[error("Authentication failed: HTTP {status}: {reason}")]
    Authentication { status: u16, reason: String },

    /// An API call returned a non-2xx status.
    #[error("Reddit API error: HTTP {status}: {reason}")]
    RemoteApi { status: u16, reason: String },

    /// The payload did not have the shape the mapper expects.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A lookup by id came back with an empty listing.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl RedditClientError {
    /// HTTP status carried by authentication and API failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            RedditClientError::Authentication { status, .. }
            | RedditClientError::RemoteApi { status, .. } => Some(*status),
            RedditClientError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        RedditClientError::MalformedResponse(msg.into())
    }
}

impl From<serde_json::Error> for RedditClientError {
    fn from(err: serde_json::Error) -> Self {
        RedditClientError::MalformedResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RedditClientError>;
