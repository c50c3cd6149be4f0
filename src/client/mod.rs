// ABOUTME: Presentation layer for the cookbook: API client, view state machine, and renderer
// ABOUTME: Drives the Entry Service and the Image Upload Relay on behalf of a user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Presentation layer
//!
//! [`view::CookbookView`] holds the page state and talks to the server only
//! through the [`api::CookbookApi`] and [`crate::external::ImageUploader`]
//! seams. The `cookbook-cli` binary pairs it with [`render`].

/// Entry Service HTTP client
pub mod api;
/// Plain-text rendering of the view
pub mod render;
/// View state machine
pub mod view;

pub use api::{ClientError, CookbookApi, CookbookApiClient};
pub use view::{Connectivity, CookbookView, Draft, SubmitOutcome, ViewState};
