//! In-memory [`FilmStore`] and fixtures for unit tests.

use std::sync::Mutex;

use crate::film::{Film, FilmData};
use crate::store::{FilmFilter, FilmStore, StoreError, UpdateOutcome};
use crate::types::DbId;

pub fn film_data(title: &str, director: &str, genre: &str) -> FilmData {
    FilmData {
        title: title.to_string(),
        director: director.to_string(),
        release_year: 2000,
        genre: genre.to_string(),
        rating: 7.0,
        watched: false,
    }
}

#[derive(Default)]
struct Inner {
    films: Vec<Film>,
    last_id: DbId,
    force_conflict: bool,
    unavailable: bool,
}

/// Vec-backed store. Updates of a missing id report a conflict, the same
/// way a zero-row `UPDATE` does in SQL.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Insert without going through validation.
    pub fn seed(&self, data: FilmData) -> Film {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let film = data.with_id(inner.last_id);
        inner.films.push(film.clone());
        film
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().films.len()
    }

    /// Make the next update report a conflict even though the row exists.
    pub fn force_conflict(&self) {
        self.inner.lock().unwrap().force_conflict = true;
    }

    /// Remove a row behind the service's back.
    pub fn remove_silently(&self, id: DbId) {
        self.inner.lock().unwrap().films.retain(|f| f.id != id);
    }

    /// Fail every subsequent call.
    pub fn go_offline(&self) {
        self.inner.lock().unwrap().unavailable = true;
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.inner.lock().unwrap().unavailable {
            return Err(StoreError::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "store offline",
            )));
        }
        Ok(())
    }
}

impl FilmStore for MemoryStore {
    async fn insert(&self, data: &FilmData) -> Result<Film, StoreError> {
        self.check()?;
        Ok(self.seed(data.clone()))
    }

    async fn get(&self, id: DbId) -> Result<Option<Film>, StoreError> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner.films.iter().find(|f| f.id == id).cloned())
    }

    async fn update(&self, id: DbId, data: &FilmData) -> Result<UpdateOutcome, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        if std::mem::take(&mut inner.force_conflict) {
            return Ok(UpdateOutcome::Conflict);
        }
        match inner.films.iter_mut().find(|f| f.id == id) {
            Some(slot) => {
                *slot = data.clone().with_id(id);
                Ok(UpdateOutcome::Updated(slot.clone()))
            }
            None => Ok(UpdateOutcome::Conflict),
        }
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.films.len();
        inner.films.retain(|f| f.id != id);
        Ok(inner.films.len() < before)
    }

    async fn list(&self) -> Result<Vec<Film>, StoreError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().films.clone())
    }

    async fn distinct_genres(&self) -> Result<Vec<String>, StoreError> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        let mut genres: Vec<String> = Vec::new();
        for film in &inner.films {
            if !genres.contains(&film.genre) {
                genres.push(film.genre.clone());
            }
        }
        Ok(genres)
    }

    async fn search(&self, filter: &FilmFilter) -> Result<Vec<Film>, StoreError> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .films
            .iter()
            .filter(|f| filter.matches(f))
            .cloned()
            .collect())
    }
}
