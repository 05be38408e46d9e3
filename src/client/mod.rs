//! HTTP client for the users API.
//!
//! Mirrors what the browser frontend does: one request per call, any
//! non-success status becomes an error carrying the status text. There is no
//! retry and no timeout here; pass a configured `reqwest::Client` through
//! [`UsersClient::with_http_client`] to bound request time.

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::api::models::HealthResponse;
use crate::core::models::user::User;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid base URL {0}: {1}")]
    InvalidBaseUrl(String, String),

    /// Request never produced a response (connection refused, DNS, ...)
    #[error("{context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{context}: {}", status_text(.status))]
    Status { context: String, status: StatusCode },

    /// Success status but the body was not the expected JSON
    #[error("{context}: invalid response body: {source}")]
    Decode {
        context: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn status_text(status: &StatusCode) -> String {
    status
        .canonical_reason()
        .map(String::from)
        .unwrap_or_else(|| status.as_u16().to_string())
}

#[derive(Clone, Debug)]
pub struct UsersClient {
    http: Client,
    base_url: Url,
}

impl UsersClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(base_url, Client::new())
    }

    pub fn with_http_client(base_url: &str, http: Client) -> Result<Self, ClientError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(base_url.to_string(), e.to_string()))?;
        Ok(UsersClient { http, base_url: parsed })
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get_json("api/health", "Error checking health".to_string()).await
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_json("api/users", "Error fetching users".to_string()).await
    }

    pub async fn fetch_user_by_id(&self, id: i32) -> Result<User, ClientError> {
        self.get_json(&format!("api/users/{}", id), format!("Error fetching user {}", id))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, context: String) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        debug!(%url, "sending request");
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(source) => return Err(ClientError::Transport { context, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { context, status });
        }
        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { context, source })
    }

    // Joins relative to the base path so a base like `http://host/prefix` keeps its prefix.
    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path)
            .map_err(|e| ClientError::InvalidBaseUrl(self.base_url.to_string(), e.to_string()))
    }
}
