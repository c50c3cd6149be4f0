// ABOUTME: HTTP client for the Entry Service used by the presentation layer
// ABOUTME: Maps non-success replies to the server's error message or an `HTTP <status>` fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use async_trait::async_trait;
use cookbook_core::constants::{routes, ui};
use cookbook_core::errors::ErrorResponse;
use cookbook_core::models::{CreateEntryBody, Entry, EntryId, StatusResponse};
use reqwest::Response;
use thiserror::Error;
use url::Url;

/// Failure talking to the Entry Service
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success status
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided `error` field, or `HTTP <status>`
        message: String,
    },
    /// Transport failure or unreadable success body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// A request URL could not be built
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// Text to show the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Network(_) | Self::Url(_) => ui::NETWORK_ERROR.to_owned(),
        }
    }

    /// HTTP status, when the service answered
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) | Self::Url(_) => None,
        }
    }
}

/// Operations the presentation layer needs from the Entry Service
#[async_trait]
pub trait CookbookApi: Send + Sync {
    /// `GET /api/health`
    async fn health(&self) -> Result<StatusResponse, ClientError>;

    /// `GET /api/messages`
    async fn list_entries(&self) -> Result<Vec<Entry>, ClientError>;

    /// `POST /api/messages`
    async fn create_entry(&self, body: &CreateEntryBody) -> Result<Entry, ClientError>;

    /// `DELETE /api/messages/:id`
    async fn delete_entry(&self, id: EntryId) -> Result<(), ClientError>;
}

/// `reqwest`-backed Entry Service client
#[derive(Debug, Clone)]
pub struct CookbookApiClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl CookbookApiClient {
    /// Client for the service at `base_url` (routes are resolved from its root)
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Client sharing an existing HTTP client
    #[must_use]
    pub const fn with_client(base_url: Url, http_client: reqwest::Client) -> Self {
        Self {
            base_url,
            http_client,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// Turn a non-success reply into [`ClientError::Api`]
    async fn error_from(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|error| !error.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));

        ClientError::Api { status, message }
    }
}

#[async_trait]
impl CookbookApi for CookbookApiClient {
    async fn health(&self) -> Result<StatusResponse, ClientError> {
        let response = self
            .http_client
            .get(self.endpoint(routes::HEALTH)?)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }

    async fn list_entries(&self) -> Result<Vec<Entry>, ClientError> {
        let response = self
            .http_client
            .get(self.endpoint(routes::MESSAGES)?)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }

    async fn create_entry(&self, body: &CreateEntryBody) -> Result<Entry, ClientError> {
        let response = self
            .http_client
            .post(self.endpoint(routes::MESSAGES)?)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_entry(&self, id: EntryId) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("{}/{id}", routes::MESSAGES))?;
        let response = self.http_client.delete(url).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }
}
