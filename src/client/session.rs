//! Bearer token bookkeeping and the OAuth2 token exchange.

use crate::config::DEFAULT_TOKEN_EXPIRES_IN;
use crate::error::{RedditClientError, Result};
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Seconds shaved off every token lifetime so a token is never sent
/// right as it expires.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

const TOKEN_PATH: &str = "/api/v1/access_token";

/// Application credentials plus whichever user credentials were configured.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    pub refresh_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// The grant flow used for a token exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant<'a> {
    RefreshToken(&'a str),
    Password { username: &'a str, password: &'a str },
    /// App-only, read-only access
    ClientCredentials,
}

impl<'a> Grant<'a> {
    pub fn grant_type(&self) -> &'static str {
        match self {
            Grant::RefreshToken(_) => "refresh_token",
            Grant::Password { .. } => "password",
            Grant::ClientCredentials => "client_credentials",
        }
    }

    /// Form body of the exchange request
    pub fn form(&self) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![("grant_type", self.grant_type())];
        match *self {
            Grant::RefreshToken(token) => params.push(("refresh_token", token)),
            Grant::Password { username, password } => {
                params.push(("username", username));
                params.push(("password", password));
            }
            Grant::ClientCredentials => {}
        }
        params
    }
}

impl Credentials {
    /// Pick the grant flow. Order matters when several credentials are
    /// configured: refresh token, then username/password, then app-only.
    pub fn select_grant(&self) -> Grant<'_> {
        if let Some(token) = self.refresh_token.as_deref() {
            return Grant::RefreshToken(token);
        }
        if let (Some(username), Some(password)) =
            (self.username.as_deref(), self.password.as_deref())
        {
            return Grant::Password { username, password };
        }
        Grant::ClientCredentials
    }

    /// Value for the `Authorization: Basic` header
    pub fn basic_auth(&self) -> String {
        base64::encode(format!("{}:{}", self.client_id, self.client_secret))
    }
}

/// Current bearer token and the instant (unix seconds) it stops being usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    expires_at: Option<i64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session holding a pre-supplied token with a known lifetime.
    pub fn seeded(access_token: impl Into<String>, lifetime_secs: i64, now: i64) -> Self {
        let mut session = Self::new();
        session.record(access_token.into(), lifetime_secs, now);
        session
    }

    /// Store a freshly issued token. `expires_at` already includes the margin.
    pub fn record(&mut self, access_token: String, lifetime_secs: i64, now: i64) {
        self.access_token = Some(access_token);
        self.expires_at = Some(
            now.saturating_add(lifetime_secs)
                .saturating_sub(EXPIRY_MARGIN_SECS),
        );
    }

    /// The token, if `now` is strictly before its expiry.
    pub fn valid_token_at(&self, now: i64) -> Option<&str> {
        match (self.access_token.as_deref(), self.expires_at) {
            (Some(token), Some(expiry)) if now < expiry => Some(token),
            _ => None,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.expires_at
    }
}

/// Owns the session of one client and refreshes it on demand.
///
/// Cloning shares the session: all clones see the same token.
#[derive(Clone)]
pub struct SessionManager {
    client: Client,
    credentials: Arc<Credentials>,
    token_url: String,
    session: Arc<Mutex<Session>>,
}

impl SessionManager {
    pub fn new(client: Client, credentials: Credentials, auth_base_url: &str, session: Session) -> Self {
        Self {
            client,
            credentials: Arc::new(credentials),
            token_url: format!("{}{}", auth_base_url.trim_end_matches('/'), TOKEN_PATH),
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Snapshot of the current session state
    pub async fn session(&self) -> Session {
        self.session.lock().await.clone()
    }

    /// Return a usable bearer token, exchanging credentials if the cached
    /// one is absent or inside the expiry margin.
    ///
    /// The session lock is held across the exchange, so concurrent callers
    /// wait for a single refresh instead of racing. A failed exchange
    /// leaves the session as it was.
    pub async fn ensure_valid_token(&self) -> Result<String> {
        let mut session = self.session.lock().await;
        let now = chrono::Utc::now().timestamp();

        if let Some(token) = session.valid_token_at(now) {
            return Ok(token.to_string());
        }

        let grant = self.credentials.select_grant();
        debug!("Requesting access token with {} grant", grant.grant_type());
        let (token, lifetime) = self.exchange(&grant).await?;

        session.record(token.clone(), lifetime, now);
        debug!("Access token obtained, valid for {} seconds", lifetime);

        Ok(token)
    }

    async fn exchange(&self, grant: &Grant<'_>) -> Result<(String, i64)> {
        let res = self
            .client
            .post(&self.token_url)
            .header(AUTHORIZATION, format!("Basic {}", self.credentials.basic_auth()))
            .form(&grant.form())
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(RedditClientError::Authentication {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = res.text().await?;
        let json: serde_json::Value = serde_json::from_str(&body)?;

        // Rejected password grants come back as 200 with an error member
        if let Some(error) = json["error"].as_str() {
            return Err(RedditClientError::Authentication {
                status: status.as_u16(),
                reason: error.to_string(),
            });
        }

        let token = json["access_token"]
            .as_str()
            .ok_or_else(|| {
                RedditClientError::malformed("token response has no access_token")
            })?
            .to_string();
        let expires_in = json["expires_in"].as_i64().unwrap_or(DEFAULT_TOKEN_EXPIRES_IN);

        Ok((token, expires_in))
    }
}
