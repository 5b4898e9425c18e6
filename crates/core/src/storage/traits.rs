use async_trait::async_trait;

use crate::movie::{CastMember, CastQuery, Movie, Record};

use super::Result;

/// Repository for movie records.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Gets every movie record in the collection as stored, following
    /// continuation keys.
    async fn scan_movies(&self) -> Result<Vec<Record>>;

    /// Gets the first movie stored under the given id, decoded into its
    /// modelled fields.
    async fn get_movie(&self, movie_id: i64) -> Result<Option<Movie>>;
}

/// Repository for cast records.
#[async_trait]
pub trait CastRepository: Send + Sync {
    /// Gets the cast members of one movie matching the query's filter.
    async fn query_cast(&self, query: &CastQuery) -> Result<Vec<CastMember>>;
}
