mod error;
mod operations;
mod parse;
mod requests;
mod types;

pub use error::{
    LookupError, CAST_UNAVAILABLE, INVALID_MOVIE_ID, MISSING_MOVIE_ID, MOVIES_UNAVAILABLE,
    MOVIE_NOT_FOUND,
};
pub use operations::join_movie_cast;
pub use parse::parse_movie_id;
pub use requests::{CastFilter, CastQuery, CastQueryParams};
pub use types::{Attributes, CastMember, Movie, MovieCast, MovieList, Record};
