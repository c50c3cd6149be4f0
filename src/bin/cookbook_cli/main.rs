// ABOUTME: Cookbook CLI - terminal front end for the recipe-sharing service
// ABOUTME: Loads the view, then lists, adds, or deletes recipes through the Entry Service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Show server status and every recipe
//! cookbook-cli list
//!
//! # Add a recipe with a pasted image URL
//! cookbook-cli add --title Soup --text "Boil it" --image-url https://x/y.png
//!
//! # Add a recipe, uploading a local image first (needs CLOUDINARY_* settings)
//! cookbook-cli add --title Bread --text Knead --image-file ./bread.jpg
//!
//! # Delete a recipe by id
//! cookbook-cli delete 3f2c8a4e-9b1d-4c55-8e2a-6f0b7d9c1e23
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cookbook::{
    client::{CookbookApiClient, CookbookView},
    config::environment::ClientConfig,
    external::{ImageUploadRelay, ImageUploader},
    logging::LoggingConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

#[derive(Parser)]
#[command(
    name = "cookbook-cli",
    about = "Cookbook terminal client",
    long_about = "List, add, and delete recipes on a running Cookbook server."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Entry Service base URL override (COOKBOOK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<Url>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show whether the server is reachable
    Status,

    /// Show every recipe, oldest first
    List,

    /// Submit a new recipe
    Add {
        /// Recipe title
        #[arg(long)]
        title: String,

        /// Recipe description
        #[arg(long)]
        text: String,

        /// Image URL (wins over --image-file)
        #[arg(long)]
        image_url: Option<String>,

        /// Local image to upload to the image host
        #[arg(long)]
        image_file: Option<PathBuf>,
    },

    /// Delete a recipe by id
    Delete {
        /// Recipe id as shown by `list`
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let http_client = reqwest::Client::new();
    let api = Arc::new(CookbookApiClient::with_client(
        config.api_url.clone(),
        http_client.clone(),
    ));
    let uploader = config.image_relay.map(|relay| {
        Arc::new(ImageUploadRelay::with_client(relay, http_client)) as Arc<dyn ImageUploader>
    });
    let view = CookbookView::new(api, uploader);
    view.load().await;

    match cli.command {
        Command::Status => commands::status(&view).await,
        Command::List => commands::list(&view).await,
        Command::Add {
            title,
            text,
            image_url,
            image_file,
        } => commands::add(&view, title, text, image_url, image_file).await,
        Command::Delete { id } => commands::delete(&view, &id).await,
    }
}
