#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use filmdb_api::config::ServerConfig;
use filmdb_api::router::build_app_router;
use filmdb_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults, rooted at `film_root`.
pub fn test_config(film_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        film_root_dir: film_root.to_path_buf(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given pool, with genre
/// directories created under `film_root`.
pub fn build_test_app(pool: SqlitePool, film_root: &Path) -> Router {
    let config = test_config(film_root);
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// A complete, valid create payload.
pub fn inception() -> serde_json::Value {
    serde_json::json!({
        "title": "Inception",
        "director": "Nolan",
        "release_year": 2010,
        "genre": "SciFi",
        "rating": 8.8,
        "watched": true
    })
}

pub fn film_json(title: &str, director: &str, genre: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "director": director,
        "release_year": 2001,
        "genre": genre,
        "rating": 7.5,
        "watched": false
    })
}
