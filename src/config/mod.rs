//! Configuration module for handling environment variables and .env files

use crate::client::session::Credentials;
use crate::error::{RedditClientError, Result};
use dotenv::dotenv;
use log::debug;
use std::env;

pub const DEFAULT_AUTH_BASE_URL: &str = "https://www.reddit.com";
pub const DEFAULT_API_BASE_URL: &str = "https://oauth.reddit.com";
pub const DEFAULT_TOKEN_EXPIRES_IN: i64 = 3600;

/// Application configuration derived from environment variables and .env file
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Reddit API credentials
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,

    // Reddit API settings
    pub user_agent: Option<String>,
    pub auth_base_url: String,
    pub api_base_url: String,

    // OAuth tokens (if provided directly)
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_expires_in: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            username: None,
            password: None,
            user_agent: None,
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: None,
            refresh_token: None,
            token_expires_in: DEFAULT_TOKEN_EXPIRES_IN,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn load() -> Self {
        // Try to load .env file, but continue even if it doesn't exist
        match dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(_) => debug!("No .env file found, using system environment variables only"),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        config.client_id = get("REDDIT_CLIENT_ID");
        config.client_secret = get("REDDIT_CLIENT_SECRET");
        config.username = get("REDDIT_USERNAME");
        config.password = get("REDDIT_PASSWORD");
        config.user_agent = get("REDDIT_USER_AGENT");
        config.access_token = get("REDDIT_ACCESS_TOKEN");
        config.refresh_token = get("REDDIT_REFRESH_TOKEN");

        if let Some(url) = get("REDDIT_AUTH_URL") {
            config.auth_base_url = url;
        }
        if let Some(url) = get("REDDIT_API_URL") {
            config.api_base_url = url;
        }

        // Token expiration - parse as seconds if provided
        if let Some(expires) = get("REDDIT_TOKEN_EXPIRES_IN").and_then(|s| s.parse::<i64>().ok()) {
            config.token_expires_in = expires;
        }

        config
    }

    /// Check the required settings and extract the credentials used for
    /// token exchange. Runs before any network activity.
    pub fn validate(&self) -> Result<Credentials> {
        let client_id = require(&self.client_id, "REDDIT_CLIENT_ID")?;
        let client_secret = require(&self.client_secret, "REDDIT_CLIENT_SECRET")?;
        let user_agent = require(&self.user_agent, "REDDIT_USER_AGENT")?;

        Ok(Credentials {
            client_id,
            client_secret,
            user_agent,
            refresh_token: self.refresh_token.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

fn require(value: &Option<String>, name: &str) -> Result<String> {
    value
        .as_ref()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .ok_or_else(|| {
            RedditClientError::Configuration(format!("{} environment variable must be set", name))
        })
}
