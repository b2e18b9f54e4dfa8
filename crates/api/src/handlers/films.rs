//! Handlers for the `/films` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use filmdb_core::catalog::FilmGroups;
use filmdb_core::film::{Film, FilmData};

use crate::error::AppResult;
use crate::extract::{FilmId, JsonBody};
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/films
///
/// Every film, or only those matching `?search=` on title, director or genre.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Film>>>> {
    let films = state.catalog.list(params.search.as_deref()).await?;
    Ok(Json(DataResponse { data: films }))
}

/// GET /api/v1/films/by-genre
pub async fn by_genre(State(state): State<AppState>) -> AppResult<Json<DataResponse<FilmGroups>>> {
    let groups = state.catalog.group_by_genre().await?;
    Ok(Json(DataResponse { data: groups }))
}

/// GET /api/v1/films/by-director
pub async fn by_director(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<FilmGroups>>> {
    let groups = state.catalog.group_by_director().await?;
    Ok(Json(DataResponse { data: groups }))
}

/// GET /api/v1/films/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    FilmId(id): FilmId,
) -> AppResult<Json<DataResponse<Film>>> {
    let film = state.catalog.get(id).await?;
    Ok(Json(DataResponse { data: film }))
}

/// POST /api/v1/films
///
/// Also creates the directory for the film's genre.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<FilmData>,
) -> AppResult<(StatusCode, Json<DataResponse<Film>>)> {
    let film = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: film })))
}

/// PUT /api/v1/films/{id}
///
/// The body is the full film; its `id` must match the path.
pub async fn update(
    State(state): State<AppState>,
    FilmId(id): FilmId,
    JsonBody(input): JsonBody<Film>,
) -> AppResult<Json<DataResponse<Film>>> {
    let film = state.catalog.update(id, input).await?;
    Ok(Json(DataResponse { data: film }))
}

/// DELETE /api/v1/films/{id}
pub async fn delete(State(state): State<AppState>, FilmId(id): FilmId) -> AppResult<StatusCode> {
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
