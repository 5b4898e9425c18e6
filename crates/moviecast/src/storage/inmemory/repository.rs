//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use moviecast_core::movie::{CastMember, CastQuery, Movie, Record};
use moviecast_core::storage::{CastRepository, MovieRepository, RepositoryError, Result};
use serde_json::Value;

/// In-memory storage backend for the handler tests and the demo mode served
/// by builds without the `dynamodb` feature.
///
/// Records are kept in insertion order, which stands in for the store's own
/// key order. Movies are held as raw records, like the store holds items,
/// and only decoded on lookup. Every scan clones the whole collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    movies: Arc<RwLock<Vec<Record>>>,
    cast: Arc<RwLock<Vec<CastMember>>>,
}

impl InMemoryRepository {
    /// Creates a repository holding the given records.
    pub fn with_records(movies: Vec<Record>, cast: Vec<CastMember>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
            cast: Arc::new(RwLock::new(cast)),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryRepository {
    async fn scan_movies(&self) -> Result<Vec<Record>> {
        Ok(self.movies.read().await.clone())
    }

    async fn get_movie(&self, movie_id: i64) -> Result<Option<Movie>> {
        let movies = self.movies.read().await;
        movies
            .iter()
            .find(|record| record.get("movieId").and_then(Value::as_i64) == Some(movie_id))
            .map(|record| {
                serde_json::from_value(Value::Object(record.clone()))
                    .map_err(|e| RepositoryError::InvalidData(e.to_string()))
            })
            .transpose()
    }
}

#[async_trait]
impl CastRepository for InMemoryRepository {
    async fn query_cast(&self, query: &CastQuery) -> Result<Vec<CastMember>> {
        let cast = self.cast.read().await;
        Ok(cast.iter().filter(|c| query.matches(c)).cloned().collect())
    }
}
