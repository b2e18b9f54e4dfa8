//! Catalog operations: list/search, grouping views, and CRUD.
//!
//! [`CatalogService`] validates input, talks to a [`FilmStore`], and keeps the
//! genre directories up to date after creates. It returns [`CoreError`]
//! values that the HTTP layer maps onto responses.

use indexmap::IndexMap;

use crate::error::CoreError;
use crate::film::{Film, FilmData};
use crate::genre_dirs::{GenreDirs, SyncReport};
use crate::store::{FilmFilter, FilmStore, UpdateOutcome};
use crate::types::DbId;

const ENTITY: &str = "Film";

/// Films grouped by a key, in first-appearance order.
pub type FilmGroups = IndexMap<String, Vec<Film>>;

pub struct CatalogService<S> {
    store: S,
    dirs: GenreDirs,
}

impl<S: FilmStore> CatalogService<S> {
    pub fn new(store: S, dirs: GenreDirs) -> Self {
        Self { store, dirs }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn genre_dirs(&self) -> &GenreDirs {
        &self.dirs
    }

    /// Startup step: create the root and one directory per stored genre.
    pub async fn sync_genre_dirs(&self) -> Result<SyncReport, CoreError> {
        self.dirs.ensure_all(&self.store).await
    }

    /// All films, or those whose title, director or genre contains
    /// `search_text`. An empty search text lists everything.
    pub async fn list(&self, search_text: Option<&str>) -> Result<Vec<Film>, CoreError> {
        let films = match search_text.filter(|text| !text.is_empty()) {
            Some(text) => {
                self.store
                    .search(&FilmFilter::TextContains(text.to_string()))
                    .await?
            }
            None => self.store.list().await?,
        };
        Ok(films)
    }

    pub async fn group_by_genre(&self) -> Result<FilmGroups, CoreError> {
        let films = self.store.list().await?;
        Ok(group_by(films, |film| film.genre.clone()))
    }

    pub async fn group_by_director(&self) -> Result<FilmGroups, CoreError> {
        let films = self.store.list().await?;
        Ok(group_by(films, |film| film.director.clone()))
    }

    pub async fn get(&self, id: DbId) -> Result<Film, CoreError> {
        self.store.get(id).await?.ok_or(not_found(id))
    }

    /// Validate, persist, then make sure the genre has a directory.
    ///
    /// A directory failure is returned to the caller, but the record stays
    /// persisted.
    pub async fn create(&self, data: FilmData) -> Result<Film, CoreError> {
        let data = data.validated()?;
        let film = self.store.insert(&data).await?;

        tracing::info!(film_id = film.id, genre = %film.genre, "Film created");

        self.dirs.ensure_genre_dir(&film.genre).await?;
        Ok(film)
    }

    /// Replace every field of film `id` with `film`.
    ///
    /// `film.id` must equal `id`. A conflict reported by the store is turned
    /// into `NotFound` when the row is gone, and surfaces as `Conflict`
    /// otherwise.
    pub async fn update(&self, id: DbId, film: Film) -> Result<Film, CoreError> {
        if film.id != id {
            return Err(not_found(id));
        }

        let data = FilmData::from(film).validated()?;
        match self.store.update(id, &data).await? {
            UpdateOutcome::Updated(updated) => {
                tracing::info!(film_id = id, "Film updated");
                Ok(updated)
            }
            UpdateOutcome::Conflict => {
                if self.store.get(id).await?.is_none() {
                    return Err(not_found(id));
                }
                tracing::warn!(film_id = id, "Concurrent modification while updating film");
                Err(CoreError::Conflict(format!(
                    "Film {id} was modified concurrently"
                )))
            }
        }
    }

    /// Permanently remove film `id`.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if self.store.get(id).await?.is_none() {
            return Err(not_found(id));
        }

        if self.store.delete(id).await? {
            tracing::info!(film_id = id, "Film deleted");
        } else {
            tracing::debug!(film_id = id, "Film already removed by another request");
        }
        Ok(())
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: ENTITY, id }
}

fn group_by(films: Vec<Film>, key: impl Fn(&Film) -> String) -> FilmGroups {
    let mut groups = FilmGroups::new();
    for film in films {
        groups.entry(key(&film)).or_default().push(film);
    }
    groups
}
