// ABOUTME: HTTP middleware for request correlation and cross-origin access
// ABOUTME: Provides request ID propagation and the CORS layer used by the server router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// CORS configuration
pub mod cors;
/// Request ID generation and propagation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
