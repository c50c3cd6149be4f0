// ABOUTME: Entry Store abstraction for persisted recipe entries
// ABOUTME: Defines the EntryStore trait and the SQLite-backed implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Entry Store
//!
//! The store exclusively owns persisted entries. It assigns identifiers and
//! creation timestamps, lists entries in creation order, and deletes by id.
//! Callers receive an explicit handle (`Arc<dyn EntryStore>`); there is no
//! process-global connection.

/// `SQLite` implementation backed by a `sqlx` pool
pub mod sqlite;

pub use sqlite::SqliteEntryStore;

use async_trait::async_trait;
use cookbook_core::errors::AppResult;
use cookbook_core::models::{Entry, EntryId, NewEntry};

/// Persistence contract for recipe entries
///
/// Failures of the underlying storage are returned to the caller, never
/// swallowed.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Assign an id and timestamp, persist, and return the stored entry
    async fn insert(&self, entry: NewEntry) -> AppResult<Entry>;

    /// All entries, ascending by creation time (ties in insertion order)
    async fn list_all(&self) -> AppResult<Vec<Entry>>;

    /// Delete an entry; deleting an unknown id is not an error
    async fn delete_by_id(&self, id: EntryId) -> AppResult<()>;

    /// Cheap connectivity probe
    async fn ping(&self) -> AppResult<()>;
}
