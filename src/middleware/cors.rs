// ABOUTME: CORS middleware configuration for the Entry Service API
// ABOUTME: Lets the browser client call the API from a different origin during development
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::environment::ServerConfig;
use crate::middleware::request_id::REQUEST_ID_HEADER;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS for the API
///
/// `CORS_ALLOWED_ORIGINS` is either `*` (any origin) or a comma-separated
/// list of exact origins. Unparseable entries are dropped; if nothing valid
/// remains the layer falls back to any origin.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="http://localhost:5173,https://cookbook.example.com"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let configured = config.cors.allowed_origins.trim();
    let allow_origin = if configured.is_empty() || configured == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = configured
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}
