// ABOUTME: Request and response bodies shared by the Entry Service and its clients
// ABOUTME: Create-entry payload and probe status body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/messages`
///
/// Every field is optional; absent fields are validated as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryBody {
    /// Recipe title
    #[serde(default)]
    pub title: Option<String>,
    /// Recipe description
    #[serde(default)]
    pub text: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of a successful health or readiness probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `ok` or `ready`
    pub status: String,
}
