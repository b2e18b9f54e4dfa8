//! Custom extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use filmdb_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Film id taken from the `{id}` path segment.
///
/// A missing or non-numeric id cannot name a film, so it is rejected as
/// 404 rather than axum's default 400.
#[derive(Debug, Clone, Copy)]
pub struct FilmId(pub DbId);

impl<S> FromRequestParts<S> for FilmId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(FilmId(id)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Rejected film id");
                Err(AppError::NotFound("Film not found".to_string()))
            }
        }
    }
}

/// JSON request body whose rejection renders through [`AppError`], so a
/// malformed body gets the same `{error, code}` envelope as every other error.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(body_rejection(rejection)),
        }
    }
}

fn body_rejection(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection, "Rejected request body");
    AppError::BadRequest(rejection.body_text())
}
