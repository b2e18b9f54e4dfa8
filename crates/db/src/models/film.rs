//! Row type for the `films` table.

use filmdb_core::film::Film;
use filmdb_core::types::DbId;
use sqlx::FromRow;

/// A row from the `films` table.
#[derive(Debug, Clone, FromRow)]
pub struct FilmRow {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    pub rating: f64,
    pub watched: bool,
}

impl From<FilmRow> for Film {
    fn from(row: FilmRow) -> Self {
        Film {
            id: row.id,
            title: row.title,
            director: row.director,
            release_year: row.release_year,
            genre: row.genre,
            rating: row.rating,
            watched: row.watched,
        }
    }
}
