//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds repository trait objects so handlers do not
//! depend on the storage backend selected by feature flags.

use std::sync::Arc;

use moviecast_core::storage::{CastRepository, MovieRepository};

#[cfg(feature = "dynamodb")]
use crate::{config::Config, storage::DynamoDbRepository};

#[cfg(any(test, not(feature = "dynamodb")))]
use crate::{
    mock_data::{demo_cast, demo_movies},
    storage::InMemoryRepository,
};

/// Shared application state.
///
/// Cloned for each request handler. The repositories, and the store client
/// behind them, are created once per process.
#[derive(Clone)]
pub struct AppState {
    /// Movie repository.
    pub movie_repo: Arc<dyn MovieRepository>,
    /// Cast repository.
    pub cast_repo: Arc<dyn CastRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repositories.
    pub fn new(movie_repo: Arc<dyn MovieRepository>, cast_repo: Arc<dyn CastRepository>) -> Self {
        Self {
            movie_repo,
            cast_repo,
        }
    }

    /// Creates an AppState backed by DynamoDB.
    ///
    /// Both repositories share a single client.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> Self {
        let repo = Arc::new(DynamoDbRepository::from_config(config).await);
        Self::new(repo.clone(), repo)
    }

    /// Creates an AppState backed by in-memory demo data.
    #[cfg(any(test, not(feature = "dynamodb")))]
    pub fn with_demo_data() -> Self {
        Self::with_repository(InMemoryRepository::with_records(
            demo_movies(),
            demo_cast(),
        ))
    }

    /// Creates an AppState where one in-memory repository serves both roles.
    #[cfg(any(test, not(feature = "dynamodb")))]
    pub fn with_repository(repo: InMemoryRepository) -> Self {
        let repo = Arc::new(repo);
        Self::new(repo.clone(), repo)
    }
}
