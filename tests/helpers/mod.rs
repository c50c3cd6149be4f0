// ABOUTME: Shared test helpers and fixtures for integration tests
// ABOUTME: In-memory Entry Store, fully layered test router, and sample request bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use cookbook::config::environment::{DatabaseConfig, DatabaseUrl, ServerConfig};
use cookbook::database::{EntryStore, SqliteEntryStore};
use cookbook::server::build_router;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

/// Fresh in-memory store with the schema applied
pub async fn memory_store() -> SqliteEntryStore {
    SqliteEntryStore::connect(&DatabaseConfig {
        url: DatabaseUrl::Memory,
        max_connections: 1,
    })
    .await
    .expect("Failed to open in-memory store")
}

/// Full application router over `store`, serving `static_dir`
pub fn router_with(store: SqliteEntryStore, static_dir: &Path) -> axum::Router {
    let config = ServerConfig {
        static_dir: static_dir.to_path_buf(),
        ..ServerConfig::for_testing()
    };
    build_router(Arc::new(store) as Arc<dyn EntryStore>, &config)
}

/// Full application router over a fresh in-memory store
pub async fn test_router() -> (axum::Router, SqliteEntryStore) {
    let store = memory_store().await;
    let router = router_with(store.clone(), Path::new("static"));
    (router, store)
}

/// The canonical valid create request
pub fn soup() -> Value {
    json!({
        "title": "Soup",
        "text": "Boil it",
        "imageUrl": "https://x/y.png"
    })
}
