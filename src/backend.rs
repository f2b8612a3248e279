//! HTTP client for the Saturn query endpoint.
//!
//! One request per user turn: POST `{"query": ...}` to the backend, decode
//! the JSON reply, and hand back display-ready text. Transport, status, and
//! decode failures are surfaced as distinct [`BackendError`] variants so the
//! caller decides whether to handle or propagate them.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to reach backend at {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("backend returned status {status}")]
    Status { status: StatusCode },
    #[error("failed to decode backend reply: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

/// Decoded reply from the backend. Either field may be absent; the server
/// reports its own failures through `error` rather than a failing status.
#[derive(Debug, Deserialize)]
pub struct BackendReply {
    pub response: Option<String>,
    pub error: Option<String>,
}

impl BackendReply {
    /// The text to show the user: `response` wins over `error`; a reply with
    /// neither renders as an empty turn rather than failing the loop.
    pub fn display_text(self) -> String {
        self.response.or(self.error).unwrap_or_default()
    }
}

pub struct BackendClient {
    http: Client,
    endpoint: String,
}

impl BackendClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one query and return the display text from the reply.
    pub async fn query(&self, query: &str) -> Result<String, BackendError> {
        debug!(%query, endpoint = %self.endpoint, "Sending query to backend");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                url: self.endpoint.clone(),
                source,
            })?;

        // The backend signals query failures in-band (error field, 2xx
        // status), so anything non-success here is a transport-level problem.
        let status = response.status();
        if !status.is_success() {
            error!(%status, "Backend request failed");
            return Err(BackendError::Status { status });
        }

        let reply = response
            .json::<BackendReply>()
            .await
            .map_err(|source| BackendError::Decode { source })?;

        debug!(?reply, "Received backend reply");
        Ok(reply.display_text())
    }
}
