//! Genre directory sync.
//!
//! Keeps `{root}/{genre}` in step with the genres in the catalog. The sync is
//! best-effort and independent of the database write: a directory may lag
//! behind its record, and no record is rolled back when a directory cannot be
//! created.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::film::is_valid_genre_segment;
use crate::store::FilmStore;

/// Summary of a full directory sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SyncReport {
    /// Genres that now have a directory under the root.
    pub ensured: Vec<String>,
    /// Stored genres that cannot be used as a directory name.
    pub skipped: Vec<String>,
}

/// Owns the root directory of the genre tree.
#[derive(Debug, Clone)]
pub struct GenreDirs {
    root: PathBuf,
}

impl GenreDirs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for `genre`, or `None` when the genre has no directory
    /// (empty, or not a valid single path segment).
    pub fn genre_path(&self, genre: &str) -> Option<PathBuf> {
        if genre.is_empty() || !is_valid_genre_segment(genre) {
            return None;
        }
        Some(self.root.join(genre))
    }

    /// Create the root directory if it does not exist.
    pub async fn ensure_root(&self) -> Result<(), CoreError> {
        create_dir(&self.root).await
    }

    /// Create the directory for a single genre. Empty genres are a no-op.
    ///
    /// Safe to call concurrently for the same genre.
    /// Whether the root exists as a directory that is not read-only.
    pub async fn root_is_writable(&self) -> bool {
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(_) => false,
        }
    }

    pub async fn ensure_genre_dir(&self, genre: &str) -> Result<(), CoreError> {
        if genre.is_empty() {
            return Ok(());
        }
        let path = self.genre_path(genre).ok_or_else(|| {
            CoreError::Internal(format!("genre '{genre}' is not a valid directory name"))
        })?;
        create_dir(&path).await
    }

    /// Ensure the root plus one directory per distinct genre in `store`.
    ///
    /// Genres that are not valid directory names are skipped with a warning;
    /// they can only come from rows written outside this service.
    pub async fn ensure_all<S: FilmStore>(&self, store: &S) -> Result<SyncReport, CoreError> {
        self.ensure_root().await?;

        let mut report = SyncReport::default();
        for genre in store.distinct_genres().await? {
            if genre.is_empty() {
                continue;
            }
            if self.genre_path(&genre).is_none() {
                tracing::warn!(genre = %genre, "Skipping genre that is not a valid directory name");
                report.skipped.push(genre);
                continue;
            }
            self.ensure_genre_dir(&genre).await?;
            report.ensured.push(genre);
        }

        tracing::info!(
            root = %self.root.display(),
            ensured = report.ensured.len(),
            skipped = report.skipped.len(),
            "Genre directories synced",
        );
        Ok(report)
    }
}

/// `create_dir_all` treats an existing directory as success, which covers two
/// requests racing to create the same genre, and fails when a file is in the way.
async fn create_dir(path: &Path) -> Result<(), CoreError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| CoreError::Filesystem {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "Ensured directory");
    Ok(())
}
