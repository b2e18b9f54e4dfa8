use std::sync::Arc;

use filmdb_core::catalog::CatalogService;
use filmdb_core::genre_dirs::GenreDirs;
use filmdb_db::{DbPool, SqlFilmStore};

use crate::config::ServerConfig;

/// The catalog service as wired in production.
pub type Catalog = CatalogService<SqlFilmStore>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Catalog operations over the pool and the genre directory root.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let dirs = GenreDirs::new(config.film_root_dir.clone());
        let catalog = CatalogService::new(SqlFilmStore::new(pool.clone()), dirs);
        Self {
            pool,
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
