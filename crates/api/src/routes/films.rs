//! Route definitions for the `/films` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

/// Routes mounted at `/films`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /by-genre       -> by_genre
/// GET    /by-director    -> by_director
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(films::list).post(films::create))
        .route("/by-genre", get(films::by_genre))
        .route("/by-director", get(films::by_director))
        .route(
            "/{id}",
            get(films::get_by_id)
                .put(films::update)
                .delete(films::delete),
        )
}
