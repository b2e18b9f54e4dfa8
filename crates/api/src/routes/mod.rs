pub mod films;
pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /films                     list (?search=), create
/// /films/by-genre            films grouped by genre
/// /films/by-director         films grouped by director
/// /films/{id}                get, update, delete
///
/// /genre-dirs/sync           re-create genre directories (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/films", films::router())
        .route("/genre-dirs/sync", post(handlers::genre_dirs::sync))
}
