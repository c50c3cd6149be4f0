// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness never touches the store; readiness pings it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::database::EntryStore;
use axum::{extract::State, routing::get, Json, Router};
use cookbook_core::constants::{messages, routes, status};
use cookbook_core::errors::{AppError, AppResult};
use cookbook_core::models::StatusResponse;
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the liveness and readiness routes
    pub fn routes(store: Arc<dyn EntryStore>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .route(routes::READY, get(Self::handle_ready))
            .with_state(store)
    }

    /// Handle GET /api/health
    async fn handle_health() -> Json<StatusResponse> {
        Json(StatusResponse {
            status: status::OK.to_owned(),
        })
    }

    /// Handle GET /api/ready
    async fn handle_ready(
        State(store): State<Arc<dyn EntryStore>>,
    ) -> AppResult<Json<StatusResponse>> {
        store.ping().await.map_err(|e| {
            warn!(error = %e, "Readiness check failed");
            AppError::unavailable(messages::STORE_UNAVAILABLE).with_source(e)
        })?;

        Ok(Json(StatusResponse {
            status: status::READY.to_owned(),
        }))
    }
}
