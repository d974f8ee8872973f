use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /`.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub documentation: String,
}

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub games: usize,
}

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome",
        version: env!("CARGO_PKG_VERSION"),
        documentation: state.config.service.docs_url.clone(),
    })
}

/// Liveness check. Also reports how many games the catalog holds.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let games = state.catalog.read().await.len();
    Json(HealthResponse {
        status: "healthy",
        service: state.config.service.name.clone(),
        games,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "healthy",
            service: "bib".to_string(),
            games: 3,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"healthy\""));
        assert!(json.contains("\"service\":\"bib\""));
        assert!(json.contains("\"games\":3"));
    }

    #[tokio::test]
    async fn health_counts_seeded_games() {
        let state = AppState::new(ServerConfig::default());
        let json = health_check(State(state)).await;
        assert_eq!(json.status, "healthy");
        assert_eq!(json.games, 3);
    }

    #[tokio::test]
    async fn root_points_at_docs() {
        let state = AppState::new(ServerConfig::default());
        let json = root(State(state)).await;
        assert_eq!(json.message, "Welcome");
        assert_eq!(json.documentation, "/docs");
    }
}
