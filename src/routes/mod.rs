// ABOUTME: Route module organization for the Cookbook HTTP endpoints
// ABOUTME: Groups probe, entry, and static-asset routes; each domain builds its own Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route modules for the Entry Service
//!
//! Each domain module exposes a `*Routes` type whose `routes()` builds a
//! fully-stated [`axum::Router`]; [`crate::server::build_router`] merges them.

/// Recipe entry CRUD routes
pub mod entries;
/// Liveness and readiness probes
pub mod health;
/// Static asset and single-page-app fallback
pub mod static_files;

pub use entries::EntryRoutes;
pub use health::HealthRoutes;
pub use static_files::StaticRoutes;
