//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use std::path::PathBuf;

use async_trait::async_trait;
use productfeed::products::{FetchError, Product, ProductSource};
use tempfile::TempDir;
use tokio::sync::{oneshot, Mutex};

/// Endpoint on a port nothing listens on.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/posts", port)
}

pub fn product(id: u64, title: &str, body: &str) -> Product {
    Product {
        id: id.into(),
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Source whose result is supplied by the test after the fetch has started.
pub struct GatedSource {
    gate: Mutex<Option<oneshot::Receiver<Result<Vec<Product>, FetchError>>>>,
}

impl GatedSource {
    pub fn new() -> (Self, oneshot::Sender<Result<Vec<Product>, FetchError>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait]
impl ProductSource for GatedSource {
    fn endpoint(&self) -> &str {
        "gated://test"
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let rx = self
            .gate
            .lock()
            .await
            .take()
            .expect("GatedSource fetched more than once");
        rx.await.expect("gate sender dropped")
    }
}

/// Source that always returns the same result immediately.
pub struct FixedSource(pub Vec<Product>);

#[async_trait]
impl ProductSource for FixedSource {
    fn endpoint(&self) -> &str {
        "fixed://test"
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        Ok(self.0.clone())
    }
}
