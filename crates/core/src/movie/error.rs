use thiserror::Error;

use crate::storage::RepositoryError;

pub const MISSING_MOVIE_ID: &str = "Missing query parameter: movieId";
pub const INVALID_MOVIE_ID: &str = "Invalid query parameter: movieId";
pub const MOVIE_NOT_FOUND: &str = "Movie not found";
pub const MOVIES_UNAVAILABLE: &str = "Could not retrieve movies";
pub const CAST_UNAVAILABLE: &str = "Could not retrieve cast members";

/// Errors that terminate a lookup request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// A required parameter is missing or malformed.
    #[error("{0}")]
    Validation(&'static str),
    /// The referenced record does not exist.
    #[error("{0}")]
    NotFound(&'static str),
    /// The store failed. Only `message` is shown to callers.
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl LookupError {
    /// Wraps a repository failure with a caller-facing message.
    pub fn upstream(message: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Upstream { message, source }
    }
}
