// ABOUTME: HTTP server assembly for the Entry Service
// ABOUTME: Merges route groups, applies middleware layers, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server assembly
//!
//! Layer order, outermost first: request id, CORS, request tracing, body
//! limit, routes. The request id span therefore encloses every log line a
//! request produces.

use crate::config::environment::ServerConfig;
use crate::database::EntryStore;
use crate::logging;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{EntryRoutes, HealthRoutes, StaticRoutes};
use anyhow::{Context, Result};
use axum::{extract::MatchedPath, middleware, Router};
use cookbook_core::constants::routes;
use http::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

/// Server startup: load `.env`, install the subscriber, then read the configuration
///
/// Logging comes first so configuration warnings are not lost and
/// `LOG_LEVEL` from `.env` applies.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed or a variable is invalid
pub fn init_server_environment() -> Result<ServerConfig> {
    dotenvy::dotenv().ok();
    logging::init_from_env()?;
    ServerConfig::from_env()
}

/// Build the complete application router
pub fn build_router(store: Arc<dyn EntryStore>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&store)))
        .merge(EntryRoutes::routes(
            store,
            StaticRoutes::index(&config.static_dir),
        ))
        .merge(StaticRoutes::routes(&config.static_dir))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

                    // Probes are polled constantly
                    if path == routes::HEALTH || path == routes::READY {
                        tracing::trace_span!("http", method = %request.method(), path = %path)
                    } else {
                        tracing::info_span!("http", method = %request.method(), path = %path)
                    }
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &http::Response<_>, latency: Duration, span: &Span| {
                        if span.metadata().map(|m| m.level()) == Some(&tracing::Level::TRACE) {
                            return;
                        }
                        tracing::info!(
                            status = %response.status().as_u16(),
                            latency_ms = %latency.as_millis(),
                            "Request completed"
                        );
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "Request failed"
                        );
                    },
                ),
        )
        .layer(setup_cors(config))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Entry Service HTTP server
pub struct CookbookServer {
    config: ServerConfig,
    store: Arc<dyn EntryStore>,
}

impl CookbookServer {
    /// Create a server over an already-connected store
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn EntryStore>) -> Self {
        Self { config, store }
    }

    /// Bind the configured address
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or already in use
    pub async fn bind(&self) -> Result<TcpListener> {
        let address = self.config.bind_address();
        TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))
    }

    /// Serve on `listener` until ctrl-c
    ///
    /// # Errors
    ///
    /// Returns an error if the accept loop fails
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serve on `listener` until `shutdown` resolves
    ///
    /// # Errors
    ///
    /// Returns an error if the accept loop fails
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let local: SocketAddr = listener.local_addr()?;
        let app = build_router(self.store, &self.config);

        info!("Entry Service listening on http://{local}");
        info!(
            "Serving single-page app from {}",
            self.config.static_dir.display()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server terminated")?;

        info!("Entry Service stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => tracing::warn!("Failed to listen for shutdown signal: {e}"),
    }
}
