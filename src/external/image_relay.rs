// ABOUTME: Image Upload Relay client for the third-party image host (Cloudinary unsigned uploads)
// ABOUTME: Turns a local file into a publicly retrievable URL before an entry is created
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Image Upload Relay
//!
//! Sends `multipart/form-data` with a `file` part and an `upload_preset` text
//! field to `{base_url}/{cloud_name}/image/upload` and returns the
//! `secure_url` from the JSON reply. The Entry Service is never involved;
//! the returned URL is simply used as the entry's `imageUrl`.

use crate::config::environment::ImageRelayConfig;
use crate::logging::AppLogger;
use async_trait::async_trait;
use cookbook_core::errors::{AppError, AppResult};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

const SERVICE_NAME: &str = "Image host";

/// Turns local image bytes into a hosted URL
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Upload `bytes` under `file_name`, returning the hosted URL
    async fn upload_bytes(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<String>;

    /// Read `path` and upload its contents
    async fn upload_file(&self, path: &Path) -> AppResult<String> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::invalid_input(format!("Cannot read image {}: {e}", path.display()))
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");
        self.upload_bytes(file_name, bytes).await
    }
}

/// Subset of the image host's upload reply we rely on
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// HTTP client for the image host's unsigned upload endpoint
#[derive(Debug, Clone)]
pub struct ImageUploadRelay {
    config: ImageRelayConfig,
    http_client: reqwest::Client,
}

impl ImageUploadRelay {
    /// Create a relay with a default HTTP client
    #[must_use]
    pub fn new(config: ImageRelayConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a relay sharing an existing HTTP client
    #[must_use]
    pub const fn with_client(config: ImageRelayConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    async fn send(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<String> {
        let url = self.config.upload_url();
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name.to_owned()))
            .text("upload_preset", self.config.upload_preset.clone());

        debug!(upload.url = %url, "Uploading image");
        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE_NAME, e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!(
                    "upload failed with HTTP {}: {}",
                    response.status(),
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let body: UploadResponse = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        body.secure_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                AppError::external_service(SERVICE_NAME, "upload failed: no secure_url in reply")
            })
    }
}

#[async_trait]
impl ImageUploader for ImageUploadRelay {
    async fn upload_bytes(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<String> {
        let started = Instant::now();
        let size = bytes.len();
        let result = self.send(file_name, bytes).await;

        AppLogger::log_image_upload(
            file_name,
            size,
            result.is_ok(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        result
    }
}
