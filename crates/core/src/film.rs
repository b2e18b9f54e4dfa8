//! The `Film` record and the validation rules applied before it is persisted.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::types::DbId;

/// Characters rejected in a genre because the genre doubles as a directory name.
const RESERVED_GENRE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Inclusive rating bounds.
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// A persisted film.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    /// Assigned by the store. Missing in an update body means `0`, which never
    /// matches a stored row.
    #[serde(default)]
    pub id: DbId,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub director: String,
    pub release_year: i32,
    #[serde(deserialize_with = "null_as_empty")]
    pub genre: String,
    pub rating: f64,
    pub watched: bool,
}

/// Everything about a film except its id: the create payload, and the part of
/// an update that gets validated and written.
///
/// Missing JSON fields take their zero value, and a `null` text field reads as
/// empty, so that an absent `title` is reported as a validation error on
/// `title` instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FilmData {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom(function = "non_blank", message = "Title is required"))]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom(function = "non_blank", message = "Director is required"))]
    pub director: String,
    pub release_year: i32,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom(
        function = "genre_segment",
        message = "Genre cannot be used as a directory name"
    ))]
    pub genre: String,
    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: f64,
    pub watched: bool,
}

impl FilmData {
    /// Validate and normalize in one step. The returned copy has its rating
    /// rounded to two fractional digits.
    pub fn validated(&self) -> Result<FilmData, validator::ValidationErrors> {
        self.validate()?;
        Ok(FilmData {
            rating: round_rating(self.rating),
            ..self.clone()
        })
    }

    /// Attach an id, producing the persisted shape.
    pub fn with_id(self, id: DbId) -> Film {
        Film {
            id,
            title: self.title,
            director: self.director,
            release_year: self.release_year,
            genre: self.genre,
            rating: self.rating,
            watched: self.watched,
        }
    }
}

impl From<Film> for FilmData {
    fn from(film: Film) -> Self {
        FilmData {
            title: film.title,
            director: film.director,
            release_year: film.release_year,
            genre: film.genre,
            rating: film.rating,
            watched: film.watched,
        }
    }
}

/// Round half away from zero to two fractional digits.
pub fn round_rating(rating: f64) -> f64 {
    (rating * 100.0).round() / 100.0
}

/// Whether `genre` can be used verbatim as a single path segment.
///
/// The empty string is accepted here; callers treat it as "no directory".
pub fn is_valid_genre_segment(genre: &str) -> bool {
    if genre == "." || genre == ".." {
        return false;
    }
    !genre
        .chars()
        .any(|c| c.is_control() || RESERVED_GENRE_CHARS.contains(&c))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn genre_segment(value: &str) -> Result<(), ValidationError> {
    if is_valid_genre_segment(value) {
        Ok(())
    } else {
        Err(ValidationError::new("path_segment"))
    }
}
