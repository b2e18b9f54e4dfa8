//! Repository for the `films` table.

use filmdb_core::film::FilmData;
use filmdb_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::film::FilmRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, director, release_year, genre, rating, watched";

/// Provides CRUD and query operations for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a new film, returning the created row with its assigned id.
    pub async fn create(pool: &SqlitePool, input: &FilmData) -> Result<FilmRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO films (title, director, release_year, genre, rating, watched)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilmRow>(&query)
            .bind(&input.title)
            .bind(&input.director)
            .bind(input.release_year)
            .bind(&input.genre)
            .bind(input.rating)
            .bind(input.watched)
            .fetch_one(pool)
            .await
    }

    /// Find a film by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<FilmRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films WHERE id = ?");
        sqlx::query_as::<_, FilmRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all films in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<FilmRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films ORDER BY id");
        sqlx::query_as::<_, FilmRow>(&query).fetch_all(pool).await
    }

    /// Films whose title, director or genre contains `text`.
    ///
    /// Uses `LIKE`, so ASCII letters match case-insensitively. Wildcards in
    /// `text` are escaped and match literally.
    pub async fn search(pool: &SqlitePool, text: &str) -> Result<Vec<FilmRow>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like_literal(text));
        let query = format!(
            r"SELECT {COLUMNS} FROM films
             WHERE title LIKE ? ESCAPE '\'
                OR director LIKE ? ESCAPE '\'
                OR genre LIKE ? ESCAPE '\'
             ORDER BY id"
        );
        sqlx::query_as::<_, FilmRow>(&query)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Distinct genre values, ordered by first appearance.
    pub async fn distinct_genres(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT genre FROM films GROUP BY genre ORDER BY MIN(id)",
        )
        .fetch_all(pool)
        .await
    }

    /// Overwrite every column of film `id`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &FilmData,
    ) -> Result<Option<FilmRow>, sqlx::Error> {
        let query = format!(
            "UPDATE films SET
                title = ?,
                director = ?,
                release_year = ?,
                genre = ?,
                rating = ?,
                watched = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilmRow>(&query)
            .bind(&input.title)
            .bind(&input.director)
            .bind(input.release_year)
            .bind(&input.genre)
            .bind(input.rating)
            .bind(input.watched)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a film by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM films WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn escape_like_literal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '%' => out.push_str("\\%"),
            '_' => out.push_str("\\_"),
            other => out.push(other),
        }
    }
    out
}
