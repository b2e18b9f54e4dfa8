//! Handlers for the genre directory tree.

use axum::extract::State;
use axum::Json;
use filmdb_core::genre_dirs::SyncReport;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/genre-dirs/sync
///
/// Re-run the startup sync: one directory per distinct stored genre.
pub async fn sync(State(state): State<AppState>) -> AppResult<Json<DataResponse<SyncReport>>> {
    let report = state.catalog.sync_genre_dirs().await?;
    Ok(Json(DataResponse { data: report }))
}
