//! Pure functions for assembling lookup responses.

use super::error::{LookupError, MOVIE_NOT_FOUND};
use super::types::{CastMember, Movie, MovieCast};

/// Joins a movie lookup with the cast rows queried for the same id.
///
/// The movie must exist: cast rows are discarded when it does not.
pub fn join_movie_cast(
    movie: Option<Movie>,
    cast: Vec<CastMember>,
) -> Result<MovieCast, LookupError> {
    let movie = movie.ok_or(LookupError::NotFound(MOVIE_NOT_FOUND))?;
    Ok(MovieCast::new(movie, cast))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_with_movie() {
        let movie = Movie::new(550, "Fight Club").with_genre_ids([1, 2, 3]);
        let cast = vec![
            CastMember::new(550, "Brad Pitt", "Tyler Durden"),
            CastMember::new(550, "Edward Norton", "Narrator"),
        ];

        let joined = join_movie_cast(Some(movie), cast).unwrap();

        assert_eq!(joined.movie_id, 550);
        assert_eq!(joined.title, "Fight Club");
        assert_eq!(joined.genre_ids, Some(vec![1, 2, 3]));
        assert_eq!(joined.cast.len(), 2);
    }

    #[test]
    fn test_join_without_movie_is_not_found() {
        let cast = vec![CastMember::new(999999, "Nobody", "Ghost")];

        assert_eq!(
            join_movie_cast(None, cast),
            Err(LookupError::NotFound(MOVIE_NOT_FOUND))
        );
    }
}
