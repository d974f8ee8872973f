use std::net::SocketAddr;
use std::time::Duration;

use catalog_server::build_app;
use catalog_server::config::{CatalogConfig, ServerConfig};

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with the demo catalog.
    pub async fn new() -> Self {
        Self::from_config(ServerConfig::default()).await
    }

    /// Start a test server with an empty catalog.
    pub async fn empty() -> Self {
        let config = ServerConfig {
            catalog: CatalogConfig {
                seed_demo_data: false,
            },
            ..ServerConfig::default()
        };
        Self::from_config(config).await
    }

    pub async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn games_url(&self) -> String {
        format!("{}/games", self.base_url())
    }

    pub fn game_url(&self, id: u64) -> String {
        format!("{}/games/{id}", self.base_url())
    }
}

/// JSON body for creating a game.
pub fn game_body(title: &str, editor: &str) -> serde_json::Value {
    serde_json::json!({ "title": title, "editor": editor })
}

/// Assert the response has `status` and a JSON `{"error": ..}` body.
/// Returns the error message.
pub async fn assert_json_error(resp: reqwest::Response, status: u16) -> String {
    assert_eq!(resp.status(), status);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "Expected JSON error body, got {content_type}"
    );
    let body: serde_json::Value = resp.json().await.unwrap();
    body["error"].as_str().unwrap().to_string()
}
