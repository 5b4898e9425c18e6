//! Cast lookup handler.
//!
//! Resolves the query parameters, then fetches the cast rows and the parent
//! movie concurrently. Both lookups only need the movie id.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use moviecast_core::movie::{
    join_movie_cast, CastQueryParams, LookupError, MovieCast, CAST_UNAVAILABLE,
};

use crate::{handlers::AppError, state::AppState};

/// Get a movie with its cast (GET /movies/cast).
///
/// Query parameters: `movieId` (required), `roleName` or `actorName` (optional
/// prefixes, `roleName` wins when both are given). The query string is read as
/// a plain map, so extraction never rejects; a repeated key keeps its last
/// value.
pub async fn get_movie_cast(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<MovieCast>, AppError> {
    let params = CastQueryParams::from(query);
    tracing::info!(?params, "Cast query request");

    let query = params.resolve()?;

    let (cast, movie) = tokio::try_join!(
        state.cast_repo.query_cast(&query),
        state.movie_repo.get_movie(query.movie_id),
    )
    .map_err(LookupError::upstream(CAST_UNAVAILABLE))?;

    let joined = join_movie_cast(movie, cast)?;

    tracing::info!(
        movie_id = joined.movie_id,
        cast = joined.cast.len(),
        "Resolved movie cast"
    );

    Ok(Json(joined))
}
