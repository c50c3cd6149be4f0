// ABOUTME: SQLite-backed Entry Store using a sqlx connection pool
// ABOUTME: Creates the entries table on connect and implements insert, ordered list, and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::EntryStore;
use crate::config::environment::{DatabaseConfig, DatabaseUrl};
use crate::logging::AppLogger;
use async_trait::async_trait;
use cookbook_core::errors::{AppError, AppResult};
use cookbook_core::models::{timestamp, Entry, EntryId, NewEntry};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use std::time::Instant;
use tracing::info;

const ENTRIES_TABLE: &str = "entries";

/// Entry Store persisted in `SQLite`
#[derive(Clone)]
pub struct SqliteEntryStore {
    pool: SqlitePool,
}

impl SqliteEntryStore {
    /// Wrap an existing pool (schema must already exist, see [`Self::migrate`])
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the configured database, creating the file and schema if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = match &config.url {
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::config(format!(
                            "Cannot create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                SqliteConnectOptions::new().filename(path)
            }
            DatabaseUrl::Memory => SqliteConnectOptions::from_str(&config.url.to_connection_string())
                .map_err(|e| AppError::config(format!("Invalid DATABASE_URL: {e}")))?,
        }
        .create_if_missing(true);

        // Every in-memory connection is its own database, so keep exactly one alive
        let pool_options = if config.url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        let store = Self::new(pool);
        store.migrate().await?;

        info!("Entry store ready: {}", config.url);
        Ok(store)
    }

    /// Create the entries table and its ordering index
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS entries (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                text TEXT NOT NULL,
                image_url TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create entries table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_entries_created_at ON entries(created_at, seq)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create entries index: {e}")))?;

        Ok(())
    }

    /// Get a reference to the pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection; later operations fail
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl EntryStore for SqliteEntryStore {
    async fn insert(&self, entry: NewEntry) -> AppResult<Entry> {
        let started = Instant::now();
        let id = EntryId::generate();
        let created_at = timestamp::now();
        let created_at_str = timestamp::format(&created_at);

        let result = sqlx::query(
            r"
            INSERT INTO entries (id, title, text, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ",
        )
        .bind(id.to_string())
        .bind(&entry.title)
        .bind(&entry.text)
        .bind(&entry.image_url)
        .bind(&created_at_str)
        .execute(&self.pool)
        .await;

        AppLogger::log_database_operation(
            "insert",
            ENTRIES_TABLE,
            result.is_ok(),
            elapsed_ms(started),
        );
        result.map_err(|e| AppError::database(format!("Failed to create entry: {e}")))?;

        Ok(entry.into_entry(id, created_at))
    }

    async fn list_all(&self) -> AppResult<Vec<Entry>> {
        let started = Instant::now();
        let result = sqlx::query(
            r"
            SELECT id, title, text, image_url, created_at, updated_at
            FROM entries
            ORDER BY created_at ASC, seq ASC
            ",
        )
        .fetch_all(&self.pool)
        .await;

        AppLogger::log_database_operation(
            "list",
            ENTRIES_TABLE,
            result.is_ok(),
            elapsed_ms(started),
        );
        let rows = result.map_err(|e| AppError::database(format!("Failed to list entries: {e}")))?;

        rows.iter().map(row_to_entry).collect()
    }

    async fn delete_by_id(&self, id: EntryId) -> AppResult<()> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await;

        AppLogger::log_database_operation(
            "delete",
            ENTRIES_TABLE,
            result.is_ok(),
            elapsed_ms(started),
        );
        let done = result
            .map_err(|e| AppError::database(format!("Failed to delete entry {id}: {e}")))?;
        if done.rows_affected() == 0 {
            tracing::debug!(entry.id = %id, "Delete of unknown entry ignored");
        }

        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::unavailable(format!("Entry store unreachable: {e}")))?;
        Ok(())
    }
}

fn row_to_entry(row: &SqliteRow) -> AppResult<Entry> {
    let id_str: String = row.get("id");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    Ok(Entry {
        id: id_str
            .parse()
            .map_err(|e: AppError| AppError::internal(format!("Invalid stored id: {}", e.message)))?,
        title: row.get("title"),
        text: row.get("text"),
        image_url: row.get("image_url"),
        created_at: timestamp::parse(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid created_at: {e}")))?,
        updated_at: timestamp::parse(&updated_at_str)
            .map_err(|e| AppError::internal(format!("Invalid updated_at: {e}")))?,
    })
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
