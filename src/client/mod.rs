pub mod queries;
pub mod session;

use crate::config::AppConfig;
use crate::error::{RedditClientError, Result};
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use session::{Credentials, Session, SessionManager};

/// Authenticated client for the content API.
///
/// Every call goes through [`SessionManager::ensure_valid_token`] first.
/// Cloning is cheap and clones share the session.
#[derive(Clone)]
pub struct RedditClient {
    client: Client,
    api_base_url: String,
    session: SessionManager,
}

impl RedditClient {
    /// Build a client with explicit hosts and an initial session.
    pub fn new(
        credentials: Credentials,
        auth_base_url: &str,
        api_base_url: &str,
        session: Session,
    ) -> Result<Self> {
        let client = Self::get_client(&credentials.user_agent)?;
        Ok(Self {
            session: SessionManager::new(client.clone(), credentials, auth_base_url, session),
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from a configuration object.
    ///
    /// Fails with a configuration error before any network activity when
    /// the client id, secret or user agent is missing.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let credentials = config.validate()?;
        debug!(
            "Creating RedditClient with user_agent: {}",
            credentials.user_agent
        );

        let session = match &config.access_token {
            Some(token) => {
                debug!("Seeding session with pre-supplied access token");
                Session::seeded(
                    token.clone(),
                    config.token_expires_in,
                    chrono::Utc::now().timestamp(),
                )
            }
            None => Session::new(),
        };

        Self::new(
            credentials,
            &config.auth_base_url,
            &config.api_base_url,
            session,
        )
    }

    fn get_client(user_agent: &str) -> Result<Client> {
        Ok(Client::builder().user_agent(user_agent).build()?)
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.session
    }

    /// GET `path` on the API host and return the decoded body.
    pub async fn execute(&self, path: &str, query: &[(&str, String)]) -> Result<serde_json::Value> {
        self.execute_with_method(Method::GET, path, query).await
    }

    /// Issue an authenticated request on the API host.
    ///
    /// A non-2xx reply is returned as [`RedditClientError::RemoteApi`]
    /// without reading the body. Nothing is retried.
    pub async fn execute_with_method(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value> {
        let token = self.session.ensure_valid_token().await?;

        let url = format!("{}{}", self.api_base_url, path);
        debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, &url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .query(&[("raw_json", "1")])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(RedditClientError::RemoteApi {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Response body length: {} bytes", body.len());

        serde_json::from_str(&body).map_err(|e| {
            debug!("First 100 chars: {}", body.chars().take(100).collect::<String>());
            RedditClientError::from(e)
        })
    }
}
