pub mod api;
pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod health;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router and application state from a config.
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let timeout = config.request_timeout();
    let cors_permissive = config.http.cors_permissive;
    let docs_routes = docs::docs_router(config.service.docs_url.clone(), &config.service.name);
    let state = AppState::new(config);

    // `/games` and `/games/` both address the collection
    let mut app = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/games", get(api::list_games).post(api::create_game))
        .route("/games/", get(api::list_games).post(api::create_game))
        .route(
            "/games/{id}",
            get(api::get_game)
                .put(api::update_game)
                .delete(api::delete_game),
        )
        .route(docs::OPENAPI_JSON_PATH, get(docs::openapi_json))
        .merge(docs_routes)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http());

    if cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    (app.with_state(state.clone()), state)
}
