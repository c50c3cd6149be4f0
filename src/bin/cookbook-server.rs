// ABOUTME: Entry Service binary: connects the Entry Store and serves the JSON API and SPA
// ABOUTME: Configuration comes from the environment; --port overrides the listening port
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Cookbook Server Binary
//!
//! ```bash
//! DATABASE_URL=sqlite:./data/cookbook.db STATIC_DIR=static cookbook-server --port 8080
//! ```

use anyhow::Result;
use clap::Parser;
use cookbook::{
    database::SqliteEntryStore,
    server::{init_server_environment, CookbookServer},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "cookbook-server")]
#[command(about = "Cookbook - recipe-sharing JSON API and single-page app host")]
struct Args {
    /// Override the listening port (PORT / HTTP_PORT)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// Override the bind address (HOST)
    #[arg(long)]
    host: Option<String>,

    /// Override the single-page app directory (STATIC_DIR)
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = init_server_environment()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    info!("Starting Cookbook Entry Service");
    info!("{}", config.summary());

    let store = SqliteEntryStore::connect(&config.database).await?;
    let server = CookbookServer::new(config, Arc::new(store.clone()));
    let listener = server.bind().await?;

    let result = server.serve(listener).await;
    store.close().await;

    if let Err(e) = &result {
        error!("Server error: {e:#}");
    }
    result
}
