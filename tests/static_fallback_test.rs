// ABOUTME: Integration tests for static asset serving and the single-page-app fallback
// ABOUTME: Existing files are served as-is; unknown GET paths return the root document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use cookbook::models::EntryId;
use helpers::axum_test::AxumTestRequest;
use helpers::{memory_store, router_with, soup, test_router};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const INDEX: &str = "<!doctype html><title>cookbook test root</title>";

async fn app_with_assets() -> (axum::Router, TempDir) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::write(dir.path().join("app.js"), "console.log('cookbook');").unwrap();

    let router = router_with(memory_store().await, dir.path());
    (router, dir)
}

#[tokio::test]
async fn test_root_serves_index() {
    let (app, _dir) = app_with_assets().await;

    let response = AxumTestRequest::get("/").send(app).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), INDEX);
}

#[tokio::test]
async fn test_existing_asset_is_served() {
    let (app, _dir) = app_with_assets().await;

    let response = AxumTestRequest::get("/app.js").send(app).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "console.log('cookbook');");
}

#[tokio::test]
async fn test_unknown_paths_fall_back_to_index() {
    let (app, _dir) = app_with_assets().await;

    for path in ["/recipes/42", "/some/deep/link", "/api/unknown"] {
        let response = AxumTestRequest::get(path).send(app.clone()).await;
        assert_eq!(response.status(), 200, "path: {path}");
        assert_eq!(response.text(), INDEX);
    }
}

#[tokio::test]
async fn test_unhandled_methods_fall_back_to_index() {
    let (app, _dir) = app_with_assets().await;
    let created = AxumTestRequest::post("/api/messages")
        .json(&soup())
        .send(app.clone())
        .await;
    assert_eq!(created.status(), 201);
    let created: Value = created.json();
    let id = created["_id"].as_str().unwrap().to_owned();

    let requests = [
        AxumTestRequest::get(&format!("/api/messages/{id}")),
        AxumTestRequest::get(&format!("/api/messages/{}", EntryId::generate())),
        AxumTestRequest::delete("/api/messages"),
        AxumTestRequest::post("/recipes/new"),
        AxumTestRequest::delete("/app.js"),
    ];
    for request in requests {
        let response = request.send(app.clone()).await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.text(), INDEX);
    }

    // None of the above reached a handler
    let listed = AxumTestRequest::get("/api/messages").send(app).await;
    let listed: Vec<Value> = listed.json();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_api_routes_win_over_fallback() {
    let (app, _dir) = app_with_assets().await;

    let response = AxumTestRequest::get("/api/messages").send(app).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn test_bundled_root_document() {
    let (app, _store) = test_router().await;

    let response = AxumTestRequest::get("/").send(app).await;

    assert_eq!(response.status(), 200);
    assert!(response.text().contains("The Cook Book"));
}
