// ABOUTME: Main library entry point for the Cookbook recipe-sharing service
// ABOUTME: Provides the Entry Store, the Entry Service HTTP API, the image relay, and the client view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Cookbook
//!
//! A small recipe-sharing service. Users submit a titled recipe with a
//! description and an image (a pasted URL or an uploaded file); the server
//! stores entries and returns them in creation order.
//!
//! ## Architecture
//!
//! - **database**: the `EntryStore` trait and its `SQLite` implementation
//! - **routes** / **server**: the JSON API (`/api/health`, `/api/ready`,
//!   `/api/messages`) plus the single-page-app fallback
//! - **external**: the Image Upload Relay to the third-party image host
//! - **client**: API client, view state machine, and terminal renderer
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cookbook::config::environment::ServerConfig;
//! use cookbook::database::SqliteEntryStore;
//! use cookbook::server::CookbookServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let store = SqliteEntryStore::connect(&config.database).await?;
//!     let server = CookbookServer::new(config, Arc::new(store));
//!     let listener = server.bind().await?;
//!     server.serve(listener).await
//! }
//! ```

/// Presentation layer: API client, view, and renderer
pub mod client;

/// Environment-driven configuration
pub mod config;

/// Entry Store trait and `SQLite` implementation
pub mod database;

/// Clients for third-party services
pub mod external;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request ids)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

pub use cookbook_core::{constants, errors, models};
