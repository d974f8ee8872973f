use axum::Json;
use axum::extract::State;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use catalog_core::{Game, GameUpdate, NewGame};

use crate::api;
use crate::error::ErrorBody;
use crate::state::AppState;

/// Path of the raw OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(description = "REST API for a small video game library"),
    paths(
        api::list_games,
        api::get_game,
        api::create_game,
        api::update_game,
        api::delete_game,
    ),
    components(schemas(Game, NewGame, GameUpdate, ErrorBody)),
    tags((name = "Games", description = "Catalog of video games"))
)]
pub struct ApiDoc;

/// OpenAPI document with the configured service name as its title.
pub fn openapi(service_name: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = service_name.to_string();
    doc
}

/// GET /openapi.json
pub async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(openapi(&state.config.service.name))
}

/// Interactive API reference served at `docs_url`.
pub fn docs_router<S>(docs_url: String, service_name: &str) -> axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Scalar::with_url(docs_url, openapi(service_name)).into()
}
