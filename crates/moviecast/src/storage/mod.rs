//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `moviecast_core::storage`. The backend is selected at compile
//! time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! Without `dynamodb` the server runs against the in-memory backend seeded
//! with demo data.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p moviecast
//! ```
//!
//! Build with demo data only:
//! ```bash
//! cargo build -p moviecast --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, not(feature = "dynamodb")))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, not(feature = "dynamodb")))]
pub use inmemory::InMemoryRepository;
