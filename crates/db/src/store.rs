//! [`FilmStore`] implementation backed by the SQLite pool.

use filmdb_core::film::{Film, FilmData};
use filmdb_core::store::{FilmFilter, FilmStore, StoreError, UpdateOutcome};
use filmdb_core::types::DbId;

use crate::repositories::FilmRepo;
use crate::DbPool;

/// Adapts [`FilmRepo`] to the catalog's storage trait.
#[derive(Debug, Clone)]
pub struct SqlFilmStore {
    pool: DbPool,
}

impl SqlFilmStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl FilmStore for SqlFilmStore {
    async fn insert(&self, data: &FilmData) -> Result<Film, StoreError> {
        let row = FilmRepo::create(&self.pool, data)
            .await
            .map_err(StoreError::new)?;
        Ok(row.into())
    }

    async fn get(&self, id: DbId) -> Result<Option<Film>, StoreError> {
        let row = FilmRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::new)?;
        Ok(row.map(Film::from))
    }

    async fn update(&self, id: DbId, data: &FilmData) -> Result<UpdateOutcome, StoreError> {
        let row = FilmRepo::update(&self.pool, id, data)
            .await
            .map_err(StoreError::new)?;
        Ok(match row {
            Some(row) => UpdateOutcome::Updated(row.into()),
            None => {
                tracing::debug!(film_id = id, "UPDATE matched no row");
                UpdateOutcome::Conflict
            }
        })
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        FilmRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::new)
    }

    async fn list(&self) -> Result<Vec<Film>, StoreError> {
        let rows = FilmRepo::list(&self.pool).await.map_err(StoreError::new)?;
        Ok(rows.into_iter().map(Film::from).collect())
    }

    async fn distinct_genres(&self) -> Result<Vec<String>, StoreError> {
        FilmRepo::distinct_genres(&self.pool)
            .await
            .map_err(StoreError::new)
    }

    async fn search(&self, filter: &FilmFilter) -> Result<Vec<Film>, StoreError> {
        let rows = match filter {
            FilmFilter::TextContains(text) => FilmRepo::search(&self.pool, text).await,
        }
        .map_err(StoreError::new)?;
        Ok(rows.into_iter().map(Film::from).collect())
    }
}
