//! Domain layer for the film catalog.
//!
//! Holds the `Film` model and its validation rules, the [`store::FilmStore`]
//! persistence trait, the genre directory sync and the [`catalog::CatalogService`]
//! that ties them together. Nothing in this crate depends on a database driver.

pub mod catalog;
pub mod error;
pub mod film;
pub mod genre_dirs;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;
