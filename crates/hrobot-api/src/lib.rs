//! Typed Rust client for the Hetzner Robot webservice.
//!
//! Covers the subset needed for resolving dedicated servers:
//! server queries (get by number, list).

mod types;

pub use types::*;

const BASE_URL: &str = "https://robot-ws.your-server.de";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("robot api request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("robot api {endpoint} returned {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Hetzner Robot REST webservice.
#[derive(Clone)]
pub struct RobotClient {
    user: String,
    password: String,
    http: reqwest::Client,
}

impl RobotClient {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{BASE_URL}{path}")
    }

    async fn check(resp: reqwest::Response, endpoint: &'static str) -> Result<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api { endpoint, status, body });
        }
        Ok(resp)
    }

    // ── Servers ──────────────────────────────────────────────────────

    /// Fetch a dedicated server by its server number.
    ///
    /// Returns `Ok(None)` when the Robot webservice answers 404, so a
    /// missing server is distinguishable from a transport failure.
    pub async fn get_server(&self, server_number: i64) -> Result<Option<RobotServer>> {
        let resp = self
            .http
            .get(self.url(&format!("/server/{server_number}")))
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Ok(None);
        }

        let envelope: ServerEnvelope = Self::check(resp, "get server")
            .await?
            .json()
            .await?;
        Ok(Some(envelope.server))
    }

    /// List all dedicated servers on the account.
    pub async fn list_servers(&self) -> Result<Vec<RobotServer>> {
        let resp = self
            .http
            .get(self.url("/server"))
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await?;

        // Robot answers 404 instead of an empty list when the account
        // has no dedicated servers.
        if resp.status().as_u16() == 404 {
            return Ok(Vec::new());
        }

        let envelopes: Vec<ServerEnvelope> = Self::check(resp, "list servers")
            .await?
            .json()
            .await?;
        Ok(envelopes.into_iter().map(|e| e.server).collect())
    }
}
