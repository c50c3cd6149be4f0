// ABOUTME: Configuration module for the Cookbook server and client
// ABOUTME: Re-exports environment-driven settings types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module
//!
//! The Cookbook uses environment-only configuration: see
//! [`environment::ServerConfig::from_env`] and
//! [`environment::ClientConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{
    ClientConfig, CorsConfig, DatabaseConfig, DatabaseUrl, Environment, ImageRelayConfig,
    LogLevel, ServerConfig,
};
