//! Authenticated, read-only access to Reddit posts, comments, subreddits
//! and users.
//!
//! [`RedditClient`] owns a session that picks one of the OAuth2 grant
//! flows, caches the bearer token and refreshes it shortly before it
//! expires. Query methods return typed entities from [`models`].

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;

pub use client::session::{Credentials, Grant, Session, SessionManager};
pub use client::RedditClient;
pub use config::AppConfig;
pub use error::{RedditClientError, Result};
