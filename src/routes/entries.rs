// ABOUTME: Route handlers for the recipe entry REST API
// ABOUTME: List, create (with validation), and delete over the injected Entry Store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Entry routes
//!
//! Status codes and messages are part of the client contract:
//!
//! - list failures are always `500 Failed to load messages`
//! - create failures are `400`, validation or store alike
//! - delete failures of any kind are `400 Invalid id`

use crate::database::EntryStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, MethodRouter},
    Json, Router,
};
use cookbook_core::constants::{messages, routes};
use cookbook_core::errors::AppError;
use cookbook_core::models::{CreateEntryBody, Entry, EntryId, NewEntry};
use std::sync::Arc;
use tracing::{info, warn};

/// Entry routes handler
pub struct EntryRoutes;

impl EntryRoutes {
    /// Create all entry routes
    ///
    /// Methods these paths do not handle are answered by `unmatched`
    /// instead of a 405.
    pub fn routes(store: Arc<dyn EntryStore>, unmatched: MethodRouter) -> Router {
        Router::new()
            .route(
                routes::MESSAGES,
                get(Self::handle_list)
                    .post(Self::handle_create)
                    .fallback_service(unmatched.clone()),
            )
            .route(
                routes::MESSAGE_BY_ID,
                delete(Self::handle_delete).fallback_service(unmatched),
            )
            .with_state(store)
    }

    /// Handle GET /api/messages - all entries, oldest first
    async fn handle_list(
        State(store): State<Arc<dyn EntryStore>>,
    ) -> Result<Json<Vec<Entry>>, AppError> {
        let entries = store
            .list_all()
            .await
            .map_err(|e| AppError::internal(messages::LOAD_FAILED).with_source(e))?;

        Ok(Json(entries))
    }

    /// Handle POST /api/messages - validate, trim, and insert
    ///
    /// A body that is not a JSON object of strings is handled as an empty one.
    async fn handle_create(
        State(store): State<Arc<dyn EntryStore>>,
        body: Option<Json<CreateEntryBody>>,
    ) -> Result<Response, AppError> {
        let body = body.map(|Json(body)| body).unwrap_or_default();
        let new_entry = NewEntry::validated(
            body.title.as_deref(),
            body.text.as_deref(),
            body.image_url.as_deref(),
        )?;

        let entry = store.insert(new_entry).await.map_err(|e| {
            warn!(error = %e, "Entry insert failed");
            AppError::invalid_input(e.message.clone()).with_source(e)
        })?;

        info!(entry.id = %entry.id, "Entry created");
        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    /// Handle DELETE /api/messages/:id - idempotent removal
    async fn handle_delete(
        State(store): State<Arc<dyn EntryStore>>,
        Path(id): Path<String>,
    ) -> Result<StatusCode, AppError> {
        let id: EntryId = id.parse()?;

        store.delete_by_id(id).await.map_err(|e| {
            warn!(entry.id = %id, error = %e, "Entry delete failed");
            AppError::invalid_format(messages::INVALID_ID).with_source(e)
        })?;

        Ok(StatusCode::NO_CONTENT)
    }
}
