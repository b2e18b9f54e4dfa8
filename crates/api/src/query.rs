//! Query parameter types for API handlers.

use serde::Deserialize;

/// `?search=` for the film list.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}
