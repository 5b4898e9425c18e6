mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::{lookup_error_body, lookup_error_to_status_code, ErrorBody};
pub use traits::{CastRepository, MovieRepository};
