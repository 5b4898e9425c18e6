//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository traits
//! using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod expressions;
mod repository;

pub use repository::DynamoDbRepository;
