// ABOUTME: Core data models for the Cookbook service
// ABOUTME: Re-exports the Entry record, its identifier, and the validated creation input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! The service has a single domain entity, the recipe [`Entry`]. Entries are
//! created from a [`NewEntry`] (already trimmed and validated), read any number
//! of times, and deleted by [`EntryId`]. There is no update path.

mod entry;
mod wire;

pub use entry::{timestamp, Entry, EntryId, NewEntry};
pub use wire::{CreateEntryBody, StatusResponse};
