//! `GET /health`: liveness of the two things the catalog writes to.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when every check passes, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// The genre directory root exists and is a writable directory.
    pub film_root_ready: bool,
}

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = filmdb_db::health_check(&state.pool).await.is_ok();
    let film_root_ready = state.catalog.genre_dirs().root_is_writable().await;

    let (code, status) = if db_healthy && film_root_ready {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!(db_healthy, film_root_ready, "Health check degraded");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        film_root_ready,
    };
    (code, Json(body))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
