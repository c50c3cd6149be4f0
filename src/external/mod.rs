// ABOUTME: External API client modules (third-party image host)
// ABOUTME: Provides the Image Upload Relay used by the presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! External API Clients

pub mod image_relay;

pub use image_relay::{ImageUploadRelay, ImageUploader};
