use std::collections::BTreeMap;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

use crate::api::models::{ErrorResponse, MessageResponse};
use crate::core::models::user::{User, UserInput};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status, with whatever the server said about it
    #[error("server responded {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: StatusCode,
        message: Option<String>,
        errors: BTreeMap<String, String>,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text for a notification: the server's message when it sent one.
    pub fn notification(&self, fallback: &str) -> String {
        match self {
            ClientError::Status {
                message: Some(message), ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Per-field messages the server returned with a validation rejection.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            ClientError::Status { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// HTTP client for the `/api` endpoints. The base URL is fixed at construction.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|e| ClientError::Decode(e.to_string()));
        }
        let body = response.json::<ErrorResponse>().await.ok();
        error!(%status, message = ?body.as_ref().map(|b| &b.message), "request rejected");
        Err(ClientError::Status {
            status,
            message: body.as_ref().map(|b| b.message.clone()),
            errors: body.and_then(|b| b.errors).unwrap_or_default(),
        })
    }

    pub async fn create_user(&self, input: &UserInput) -> Result<User, ClientError> {
        debug!(name = %input.name, "creating user");
        let response = self.http.post(self.url("/user")).json(input).send().await?;
        Self::decode(response).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let response = self.http.get(self.url("/users")).send().await?;
        Self::decode(response).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, ClientError> {
        let response = self.http.get(self.url(&format!("/user/{}", user_id))).send().await?;
        Self::decode(response).await
    }

    pub async fn update_user(&self, user_id: &str, input: &UserInput) -> Result<User, ClientError> {
        debug!(%user_id, "updating user");
        let response = self
            .http
            .put(self.url(&format!("/user/{}", user_id)))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Returns the server's confirmation message.
    pub async fn delete_user(&self, user_id: &str) -> Result<String, ClientError> {
        let response = self.http.delete(self.url(&format!("/user/{}", user_id))).send().await?;
        let body: MessageResponse = Self::decode(response).await?;
        Ok(body.message)
    }
}
