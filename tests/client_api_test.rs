// ABOUTME: End-to-end tests of the reqwest API client and view against a running Entry Service
// ABOUTME: Binds the real server on an ephemeral port backed by an in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use cookbook::client::{ClientError, CookbookApi, CookbookApiClient, CookbookView, SubmitOutcome};
use cookbook::config::environment::ServerConfig;
use cookbook::constants::{messages, ui};
use cookbook::database::EntryStore;
use cookbook::models::{CreateEntryBody, EntryId};
use cookbook::server::CookbookServer;
use helpers::memory_store;
use std::sync::Arc;
use tokio::net::TcpListener;
use url::Url;

/// Start a server on 127.0.0.1:<ephemeral> and return its base URL
async fn spawn_server() -> Url {
    let store = memory_store().await;
    let server = CookbookServer::new(
        ServerConfig::for_testing(),
        Arc::new(store) as Arc<dyn EntryStore>,
    );
    let listener = server.bind().await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        server
            .serve_with_shutdown(listener, std::future::pending())
            .await
            .unwrap();
    });

    Url::parse(&format!("http://{address}")).unwrap()
}

fn soup_body() -> CreateEntryBody {
    CreateEntryBody {
        title: Some("Soup".into()),
        text: Some("Boil it".into()),
        image_url: Some("https://x/y.png".into()),
    }
}

#[tokio::test]
async fn test_client_round_trip() {
    let client = CookbookApiClient::new(spawn_server().await);

    assert_eq!(client.health().await.unwrap().status, "ok");

    let created = client.create_entry(&soup_body()).await.unwrap();
    assert_eq!(created.title, "Soup");
    assert_eq!(client.list_entries().await.unwrap(), vec![created.clone()]);

    client.delete_entry(created.id).await.unwrap();
    assert!(client.list_entries().await.unwrap().is_empty());

    // Unknown ids delete cleanly
    client.delete_entry(EntryId::generate()).await.unwrap();
}

#[tokio::test]
async fn test_client_surfaces_server_error_message() {
    let client = CookbookApiClient::new(spawn_server().await);

    let error = client
        .create_entry(&CreateEntryBody {
            image_url: None,
            ..soup_body()
        })
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(400));
    assert_eq!(error.user_message(), messages::DESCRIPTION_AND_IMAGE_REQUIRED);
}

#[tokio::test]
async fn test_client_falls_back_to_http_status() {
    // Requests to an address without our API get a non-JSON 404
    let stub = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = stub.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(stub, axum::Router::new()).await.unwrap();
    });

    let client = CookbookApiClient::new(Url::parse(&format!("http://{address}")).unwrap());
    let error = client.create_entry(&soup_body()).await.unwrap_err();

    assert_eq!(error.user_message(), "HTTP 404");
}

#[tokio::test]
async fn test_client_network_failure() {
    let address = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap()
        .local_addr()
        .unwrap();
    let client = CookbookApiClient::new(Url::parse(&format!("http://{address}")).unwrap());

    let error = client.list_entries().await.unwrap_err();

    assert!(matches!(error, ClientError::Network(_)));
    assert_eq!(error.user_message(), ui::NETWORK_ERROR);
}

#[tokio::test]
async fn test_view_against_live_server() {
    let api = Arc::new(CookbookApiClient::new(spawn_server().await));
    let view = CookbookView::new(api, None);
    view.load().await;
    assert!(view.snapshot().await.connectivity.is_ok());

    // The server insists on an image even though the view does not
    view.update_draft(|d| {
        d.title = "Bread".into();
        d.text = "Knead".into();
    })
    .await;
    assert_eq!(
        view.submit().await,
        SubmitOutcome::Rejected(messages::DESCRIPTION_AND_IMAGE_REQUIRED.to_owned())
    );

    view.update_draft(|d| d.image_url = "https://x/bread.png".into())
        .await;
    let SubmitOutcome::Created(entry) = view.submit().await else {
        panic!("submit should succeed");
    };
    assert_eq!(view.snapshot().await.entries, vec![entry.clone()]);

    assert!(view.delete(entry.id).await);
    assert!(view.snapshot().await.entries.is_empty());
}
