// ABOUTME: Core types for the Cookbook recipe-sharing service
// ABOUTME: Foundation crate with the Entry model, validation rules, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Cookbook Core
//!
//! Shared types for the Cookbook server, its client, and its tests. This crate
//! changes rarely and carries no I/O of its own.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `{ "error": ... }` wire body
//! - **models**: the `Entry` record and the validated `NewEntry` input
//! - **constants**: user-facing messages and route paths shared by server and client

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Entry data model and creation-time validation
pub mod models;

/// Messages and route paths shared between server and client
pub mod constants;
