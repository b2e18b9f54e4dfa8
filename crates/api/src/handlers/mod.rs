pub mod films;
pub mod genre_dirs;
