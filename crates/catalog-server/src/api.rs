use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use catalog_core::{Game, GameFilter, GameId, GameUpdate, NewGame};

use crate::error::{AppError, ErrorBody};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// GET /games — list games, optionally filtered by `available` and `editor`.
#[utoipa::path(
    get,
    path = "/games",
    tag = "Games",
    params(GameFilter),
    responses(
        (status = 200, description = "Games matching the filters", body = [Game]),
        (status = 400, description = "Unparseable query", body = ErrorBody),
    )
)]
pub async fn list_games(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<GameFilter>,
) -> Json<Vec<Game>> {
    let catalog = state.catalog.read().await;
    let games: Vec<Game> = catalog.list(&filter).into_iter().cloned().collect();
    tracing::debug!(?filter, matched = games.len(), "Listed games");
    Json(games)
}

/// GET /games/{id}
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "Games",
    params(("id" = u64, Path, description = "Game id")),
    responses(
        (status = 200, description = "The game", body = Game),
        (status = 404, description = "No game with this id", body = ErrorBody),
    )
)]
pub async fn get_game(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<GameId>,
) -> Result<Json<Game>, AppError> {
    let catalog = state.catalog.read().await;
    let game = catalog.get(id)?;
    Ok(Json(game.clone()))
}

/// POST /games — add a game. At most one game per editor.
#[utoipa::path(
    post,
    path = "/games",
    tag = "Games",
    request_body = NewGame,
    responses(
        (status = 201, description = "Game created", body = Game),
        (status = 400, description = "Editor already in the catalog", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody),
    )
)]
pub async fn create_game(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewGame>,
) -> Result<(StatusCode, Json<Game>), AppError> {
    let mut catalog = state.catalog.write().await;
    let game = catalog.create(body)?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// PUT /games/{id} — partial update, returns the merged record.
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = "Games",
    params(("id" = u64, Path, description = "Game id")),
    request_body = GameUpdate,
    responses(
        (status = 200, description = "Updated game", body = Game),
        (status = 400, description = "Editor used by another game", body = ErrorBody),
        (status = 404, description = "No game with this id", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody),
    )
)]
pub async fn update_game(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<GameId>,
    ApiJson(body): ApiJson<GameUpdate>,
) -> Result<Json<Game>, AppError> {
    let mut catalog = state.catalog.write().await;
    let game = catalog.update(id, body)?;
    Ok(Json(game))
}

/// DELETE /games/{id}
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "Games",
    params(("id" = u64, Path, description = "Game id")),
    responses(
        (status = 204, description = "Game removed"),
        (status = 404, description = "No game with this id", body = ErrorBody),
    )
)]
pub async fn delete_game(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<GameId>,
) -> Result<StatusCode, AppError> {
    let mut catalog = state.catalog.write().await;
    catalog.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
