// ABOUTME: HTTP integration tests for the liveness and readiness probes
// ABOUTME: Liveness is store-independent; readiness reports 503 once the store is gone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use cookbook::constants::messages;
use cookbook::database::EntryStore;
use cookbook::routes::HealthRoutes;
use helpers::axum_test::AxumTestRequest;
use helpers::{memory_store, test_router};
use serde_json::{json, Value};
use std::sync::Arc;

// ============================================================================
// GET /api/health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let (app, _store) = test_router().await;

    let response = AxumTestRequest::get("/api/health").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_ignores_store_state() {
    let (app, store) = test_router().await;
    store.close().await;

    let response = AxumTestRequest::get("/api/health").send(app).await;

    assert_eq!(response.status(), 200);
}

// ============================================================================
// GET /api/ready
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_success() {
    let store = memory_store().await;
    let routes = HealthRoutes::routes(Arc::new(store) as Arc<dyn EntryStore>);

    let response = AxumTestRequest::get("/api/ready").send(routes).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_ready_reports_unavailable_store() {
    let store = memory_store().await;
    store.close().await;
    let routes = HealthRoutes::routes(Arc::new(store) as Arc<dyn EntryStore>);

    let response = AxumTestRequest::get("/api/ready").send(routes).await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": messages::STORE_UNAVAILABLE }));
}
