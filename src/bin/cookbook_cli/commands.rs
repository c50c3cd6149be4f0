// ABOUTME: Subcommand implementations for cookbook-cli
// ABOUTME: Each command drives the shared view and prints the rendered result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::{bail, Result};
use cookbook::client::{render, CookbookView, SubmitOutcome};
use cookbook::models::EntryId;
use std::path::PathBuf;

pub async fn status(view: &CookbookView) -> Result<()> {
    let state = view.snapshot().await;
    println!("Recipe Catcher Status: {}", state.connectivity.label());
    if !state.connectivity.is_ok() {
        bail!("Server is not healthy");
    }
    Ok(())
}

pub async fn list(view: &CookbookView) -> Result<()> {
    print!("{}", render::render(&view.snapshot().await));
    Ok(())
}

pub async fn add(
    view: &CookbookView,
    title: String,
    text: String,
    image_url: Option<String>,
    image_file: Option<PathBuf>,
) -> Result<()> {
    view.update_draft(|draft| {
        draft.title = title;
        draft.text = text;
        draft.image_url = image_url.unwrap_or_default();
        draft.image_file = image_file;
    })
    .await;

    match view.submit().await {
        SubmitOutcome::Created(entry) => {
            println!("Saved recipe {}", entry.id);
            print!("{}", render::render_entry(view.snapshot().await.entries.len(), &entry));
            Ok(())
        }
        SubmitOutcome::Rejected(message) => bail!(message),
    }
}

pub async fn delete(view: &CookbookView, id: &str) -> Result<()> {
    let Ok(id) = id.parse::<EntryId>() else {
        bail!("Invalid id: {id}");
    };

    if view.delete(id).await {
        println!("Deleted recipe {id}");
        print!("{}", render::render(&view.snapshot().await));
        Ok(())
    } else {
        let state = view.snapshot().await;
        bail!(state.error.unwrap_or_default())
    }
}
