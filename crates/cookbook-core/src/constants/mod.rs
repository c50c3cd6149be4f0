// ABOUTME: Constants shared by the Cookbook server and client
// ABOUTME: User-facing error messages and HTTP route paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Messages returned by the Entry Service in `{ "error": ... }` bodies
pub mod messages {
    /// Title missing or whitespace-only
    pub const TITLE_REQUIRED: &str = "please fill out title field.";
    /// Description or image missing (both are required)
    pub const DESCRIPTION_AND_IMAGE_REQUIRED: &str = "please add description and or image.";
    /// Entry listing failed at the store
    pub const LOAD_FAILED: &str = "Failed to load messages";
    /// Delete path received an id it could not use
    pub const INVALID_ID: &str = "Invalid id";
    /// Readiness probe could not reach the store
    pub const STORE_UNAVAILABLE: &str = "Store unavailable";
}

/// Messages shown by the presentation layer
pub mod ui {
    /// Local title check failed
    pub const TITLE_REQUIRED: &str = "Title is required.";
    /// Local text check failed
    pub const TEXT_REQUIRED: &str = "Text is required.";
    /// Image relay failed
    pub const IMAGE_UPLOAD_FAILED: &str = "Image could not be uploaded.";
    /// The server could not be reached
    pub const NETWORK_ERROR: &str = "Network error. Is the server running?";
    /// Delete request failed
    pub const DELETE_FAILED: &str = "Recipe could not be deleted.";
    /// A submission is already in flight
    pub const SUBMIT_PENDING: &str = "Still saving the previous recipe.";
}

/// HTTP route paths
pub mod routes {
    /// Liveness probe
    pub const HEALTH: &str = "/api/health";
    /// Readiness probe (checks the store)
    pub const READY: &str = "/api/ready";
    /// Entry collection
    pub const MESSAGES: &str = "/api/messages";
    /// Single entry by id
    pub const MESSAGE_BY_ID: &str = "/api/messages/:id";
}

/// Status values reported by the probes
pub mod status {
    /// Liveness status value
    pub const OK: &str = "ok";
    /// Readiness status value
    pub const READY: &str = "ready";
}
