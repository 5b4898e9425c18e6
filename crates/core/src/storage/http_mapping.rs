//! Pure functions for mapping lookup errors to HTTP responses.
//!
//! Status codes and bodies are decided here so the handler layer only has to
//! write them out.

use serde::Serialize;

use crate::movie::LookupError;

/// JSON body of an error response.
///
/// Client errors carry a `message`, server errors an `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Message { message: String },
    Error { error: String },
}

/// Maps a [`LookupError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Upstream` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use moviecast_core::movie::{LookupError, MOVIE_NOT_FOUND};
/// use moviecast_core::storage::lookup_error_to_status_code;
///
/// assert_eq!(lookup_error_to_status_code(&LookupError::NotFound(MOVIE_NOT_FOUND)), 404);
/// ```
pub fn lookup_error_to_status_code(error: &LookupError) -> u16 {
    match error {
        LookupError::Validation(_) => 400,
        LookupError::NotFound(_) => 404,
        LookupError::Upstream { .. } => 500,
    }
}

/// Builds the caller-facing body for a [`LookupError`].
///
/// The repository error behind an `Upstream` failure is never included.
pub fn lookup_error_body(error: &LookupError) -> ErrorBody {
    match error {
        LookupError::Validation(message) | LookupError::NotFound(message) => ErrorBody::Message {
            message: (*message).to_string(),
        },
        LookupError::Upstream { message, .. } => ErrorBody::Error {
            error: (*message).to_string(),
        },
    }
}
