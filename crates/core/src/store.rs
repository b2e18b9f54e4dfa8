//! Persistence trait for films.
//!
//! [`FilmStore`] is the whole capability set the catalog needs from a
//! database. The SQLite implementation lives in `filmdb-db`.

use std::future::Future;

use crate::film::{Film, FilmData};
use crate::types::DbId;

/// Backend failure surfaced by a [`FilmStore`].
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct StoreError(Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(err))
    }

    /// The backend error this wraps.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

/// Result of [`FilmStore::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(Film),
    /// No row was written: the record changed or disappeared underneath us.
    Conflict,
}

/// Predicate for [`FilmStore::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmFilter {
    /// Title, director or genre contains the text.
    TextContains(String),
}

impl FilmFilter {
    /// Reference semantics for the filter, used by in-memory stores.
    ///
    /// ASCII case-insensitive, like SQLite's `LIKE`.
    pub fn matches(&self, film: &Film) -> bool {
        match self {
            FilmFilter::TextContains(text) => {
                let needle = text.to_ascii_lowercase();
                [&film.title, &film.director, &film.genre]
                    .iter()
                    .any(|field| field.to_ascii_lowercase().contains(&needle))
            }
        }
    }
}

/// Capability contract for film persistence.
///
/// Sequences are returned in id (insertion) order.
pub trait FilmStore: Send + Sync {
    /// Persist a new film; the store assigns the id.
    fn insert(&self, data: &FilmData) -> impl Future<Output = Result<Film, StoreError>> + Send;

    fn get(&self, id: DbId) -> impl Future<Output = Result<Option<Film>, StoreError>> + Send;

    /// Replace every field of film `id`.
    fn update(
        &self,
        id: DbId,
        data: &FilmData,
    ) -> impl Future<Output = Result<UpdateOutcome, StoreError>> + Send;

    /// Remove film `id`. Returns `false` if nothing was removed.
    fn delete(&self, id: DbId) -> impl Future<Output = Result<bool, StoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<Film>, StoreError>> + Send;

    fn distinct_genres(&self) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;

    fn search(
        &self,
        filter: &FilmFilter,
    ) -> impl Future<Output = Result<Vec<Film>, StoreError>> + Send;
}
