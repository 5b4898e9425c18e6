use axum::{extract::State, Json};

use moviecast_core::movie::{LookupError, MovieList, MOVIES_UNAVAILABLE};

use crate::{handlers::AppError, state::AppState};

/// List every movie (GET /movies).
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<MovieList>, AppError> {
    let data = state
        .movie_repo
        .scan_movies()
        .await
        .map_err(LookupError::upstream(MOVIES_UNAVAILABLE))?;

    tracing::info!(count = data.len(), "Listed movies");

    Ok(Json(MovieList { data }))
}
