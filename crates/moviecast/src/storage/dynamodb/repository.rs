//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `moviecast_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use moviecast_core::movie::{CastMember, CastQuery, Movie, Record};
use moviecast_core::storage::{CastRepository, MovieRepository, Result};

use crate::config::Config;

use super::conversions::{item_to_cast_member, item_to_movie, item_to_record};
use super::error::{map_query_error, map_scan_error};
use super::expressions::{
    cast_expression_values, cast_key_condition, movie_id_value, MOVIE_ID_PLACEHOLDER,
    MOVIE_KEY_CONDITION,
};

/// DynamoDB-based repository implementation.
///
/// One client serves both tables; it is created once and shared by every
/// request.
pub struct DynamoDbRepository {
    client: Client,
    movies_table: String,
    cast_table: String,
    cast_role_index: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client.
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            movies_table: config.movies_table_name.clone(),
            cast_table: config.cast_table_name.clone(),
            cast_role_index: config.cast_role_index_name.clone(),
        }
    }

    /// Creates a new repository, building the client from configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region
    /// and optional endpoint override.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config)
    }
}

// ============================================================================
// MovieRepository implementation
// ============================================================================

#[async_trait]
impl MovieRepository for DynamoDbRepository {
    async fn scan_movies(&self) -> Result<Vec<Record>> {
        let mut pages = self
            .client
            .scan()
            .table_name(&self.movies_table)
            .into_paginator()
            .send();

        let mut movies = Vec::new();
        let mut page_count = 0usize;

        while let Some(page) = pages.next().await {
            let page = page.map_err(map_scan_error)?;
            page_count += 1;
            for item in page.items() {
                movies.push(item_to_record(item)?);
            }
        }

        tracing::debug!(
            table = %self.movies_table,
            pages = page_count,
            items = movies.len(),
            "Scanned movies table"
        );

        Ok(movies)
    }

    async fn get_movie(&self, movie_id: i64) -> Result<Option<Movie>> {
        let result = self
            .client
            .query()
            .table_name(&self.movies_table)
            .key_condition_expression(MOVIE_KEY_CONDITION)
            .expression_attribute_values(MOVIE_ID_PLACEHOLDER, movie_id_value(movie_id))
            .limit(1)
            .send()
            .await
            .map_err(map_query_error)?;

        result.items().first().map(item_to_movie).transpose()
    }
}

// ============================================================================
// CastRepository implementation
// ============================================================================

#[async_trait]
impl CastRepository for DynamoDbRepository {
    async fn query_cast(&self, query: &CastQuery) -> Result<Vec<CastMember>> {
        let index_name = query
            .filter
            .uses_role_index()
            .then(|| self.cast_role_index.clone());

        let mut pages = self
            .client
            .query()
            .table_name(&self.cast_table)
            .set_index_name(index_name)
            .key_condition_expression(cast_key_condition(&query.filter))
            .set_expression_attribute_values(Some(cast_expression_values(query)))
            .into_paginator()
            .send();

        let mut cast = Vec::new();

        while let Some(page) = pages.next().await {
            let page = page.map_err(map_query_error)?;
            for item in page.items() {
                cast.push(item_to_cast_member(item)?);
            }
        }

        tracing::debug!(
            table = %self.cast_table,
            movie_id = query.movie_id,
            items = cast.len(),
            "Queried cast table"
        );

        Ok(cast)
    }
}
