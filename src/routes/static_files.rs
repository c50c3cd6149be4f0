// ABOUTME: Static asset serving with a single-page-app fallback
// ABOUTME: Existing files are served from the static directory; every unmatched request gets index.html
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use axum::{
    extract::Request,
    http::Method,
    response::IntoResponse,
    routing::{any, MethodRouter},
    Router,
};
use std::path::Path;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

/// Root document of the single-page app
pub const INDEX_FILE: &str = "index.html";

/// Static routes implementation
pub struct StaticRoutes;

impl StaticRoutes {
    /// Fallback router serving `static_dir`
    ///
    /// Installs the router fallback, so any path no other route claims
    /// (including unknown `/api/*` paths, whatever the method) resolves here.
    pub fn routes(static_dir: &Path) -> Router {
        let assets = ServeDir::new(static_dir)
            .append_index_html_on_directories(true)
            .call_fallback_on_method_not_allowed(true)
            .fallback(Self::index(static_dir));

        Router::new().fallback_service(assets)
    }

    /// Serves `index.html` for any request method
    ///
    /// `ServeFile` only answers GET and HEAD, so other methods are served as
    /// a GET. Also used as the method fallback of the API routes.
    pub fn index(static_dir: &Path) -> MethodRouter {
        let index = ServeFile::new(static_dir.join(INDEX_FILE));
        any(move |mut request: Request| {
            let index = index.clone();
            async move {
                if request.method() != Method::HEAD {
                    *request.method_mut() = Method::GET;
                }
                index.oneshot(request).await.into_response()
            }
        })
    }
}
