// ABOUTME: Presentation-layer state machine for the cookbook single-page view
// ABOUTME: Loads entries, validates and submits drafts, uploads images, and applies optimistic updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Cookbook View
//!
//! One [`CookbookView`] lives for one page load. It owns a transient copy of
//! the entry list that it updates locally after each successful create or
//! delete, and re-fetches from the server after a failed one.
//!
//! All methods take `&self`, so a UI event loop can share the view behind an
//! `Arc` and fire submissions concurrently; a second submission issued while
//! one is in flight is rejected without touching the network.

use super::api::CookbookApi;
use crate::external::ImageUploader;
use cookbook_core::constants::ui;
use cookbook_core::models::{CreateEntryBody, Entry, EntryId};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Server connectivity as shown in the status line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Health check not finished yet
    #[default]
    Checking,
    /// Health check answered with this status value
    Reported(String),
    /// Health check failed
    Unreachable,
}

impl Connectivity {
    /// Status text for display
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Checking => "checking...",
            Self::Reported(status) => status,
            Self::Unreachable => "error",
        }
    }

    /// Whether the server reported `ok`
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Reported(status) if status == "ok")
    }
}

/// Unsaved form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Title input
    pub title: String,
    /// Description input
    pub text: String,
    /// Pasted image URL input
    pub image_url: String,
    /// Local file chosen for upload
    pub image_file: Option<PathBuf>,
}

/// Snapshot of everything the view renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Status line
    pub connectivity: Connectivity,
    /// Local copy of the entry list, oldest first
    pub entries: Vec<Entry>,
    /// Current form inputs
    pub draft: Draft,
    /// Error line, cleared at the start of each submission
    pub error: Option<String>,
}

/// Result of [`CookbookView::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entry stored and appended; inputs cleared
    Created(Entry),
    /// Nothing stored; the message is also in [`ViewState::error`]
    Rejected(String),
}

/// Clears the in-flight flag when a submission ends, including by cancellation
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Single-page cookbook view
pub struct CookbookView {
    api: Arc<dyn CookbookApi>,
    uploader: Option<Arc<dyn ImageUploader>>,
    state: Mutex<ViewState>,
    submitting: AtomicBool,
}

impl CookbookView {
    /// Create a view; `uploader` is `None` when image uploads are not configured
    #[must_use]
    pub fn new(api: Arc<dyn CookbookApi>, uploader: Option<Arc<dyn ImageUploader>>) -> Self {
        Self {
            api,
            uploader,
            state: Mutex::new(ViewState::default()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Whether a submission is in flight
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Edit the form inputs
    pub async fn update_draft(&self, edit: impl FnOnce(&mut Draft) + Send) {
        edit(&mut self.state.lock().await.draft);
    }

    /// Page-load sequence: health check, then the entry list
    ///
    /// A failed list fetch leaves the list empty.
    pub async fn load(&self) {
        let connectivity = match self.api.health().await {
            Ok(status) => Connectivity::Reported(status.status),
            Err(e) => {
                debug!("Health check failed: {e}");
                Connectivity::Unreachable
            }
        };
        self.state.lock().await.connectivity = connectivity;

        let entries = self.api.list_entries().await.unwrap_or_else(|e| {
            debug!("Entry list failed: {e}");
            Vec::new()
        });
        self.state.lock().await.entries = entries;
    }

    /// Replace the local list with the server's; keeps the local copy on failure
    ///
    /// Returns whether the list was refreshed.
    pub async fn refresh(&self) -> bool {
        match self.api.list_entries().await {
            Ok(entries) => {
                self.state.lock().await.entries = entries;
                true
            }
            Err(e) => {
                debug!("Reconciliation fetch failed: {e}");
                false
            }
        }
    }

    /// Validate, upload the image if needed, and create an entry from the draft
    ///
    /// A pasted URL wins over a chosen file. On failure every input keeps its
    /// value.
    pub async fn submit(&self) -> SubmitOutcome {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return self.reject(ui::SUBMIT_PENDING).await;
        }
        let _pending = PendingGuard(&self.submitting);

        let draft = {
            let mut state = self.state.lock().await;
            state.error = None;
            state.draft.clone()
        };

        let title = draft.title.trim();
        if title.is_empty() {
            return self.reject(ui::TITLE_REQUIRED).await;
        }
        let text = draft.text.trim();
        if text.is_empty() {
            return self.reject(ui::TEXT_REQUIRED).await;
        }

        let image_url = match self.resolve_image(&draft).await {
            Ok(url) => url,
            Err(message) => return self.reject(message).await,
        };

        let body = CreateEntryBody {
            title: Some(title.to_owned()),
            text: Some(text.to_owned()),
            image_url: Some(image_url),
        };

        match self.api.create_entry(&body).await {
            Ok(entry) => {
                let mut state = self.state.lock().await;
                state.entries.push(entry.clone());
                state.draft = Draft::default();
                state.error = None;
                drop(state);
                SubmitOutcome::Created(entry)
            }
            Err(e) => {
                warn!("Create failed: {e}");
                let outcome = self.reject(&e.user_message()).await;
                self.refresh().await;
                outcome
            }
        }
    }

    /// Delete an entry and drop it from the local list
    ///
    /// Returns whether the delete succeeded. On failure the error line is
    /// set and the list is re-fetched.
    pub async fn delete(&self, id: EntryId) -> bool {
        match self.api.delete_entry(id).await {
            Ok(()) => {
                self.state.lock().await.entries.retain(|entry| entry.id != id);
                true
            }
            Err(e) => {
                warn!(entry.id = %id, "Delete failed: {e}");
                self.state.lock().await.error = Some(ui::DELETE_FAILED.to_owned());
                self.refresh().await;
                false
            }
        }
    }

    /// Pasted URL, else uploaded file, else empty
    async fn resolve_image(&self, draft: &Draft) -> Result<String, &'static str> {
        let pasted = draft.image_url.trim();
        if !pasted.is_empty() {
            return Ok(pasted.to_owned());
        }
        let Some(path) = &draft.image_file else {
            return Ok(String::new());
        };
        let Some(uploader) = &self.uploader else {
            warn!("Image file chosen but no image host is configured");
            return Err(ui::IMAGE_UPLOAD_FAILED);
        };

        uploader.upload_file(path).await.map_err(|e| {
            warn!("Image upload failed: {e}");
            ui::IMAGE_UPLOAD_FAILED
        })
    }

    async fn reject(&self, message: &str) -> SubmitOutcome {
        self.state.lock().await.error = Some(message.to_owned());
        SubmitOutcome::Rejected(message.to_owned())
    }
}
