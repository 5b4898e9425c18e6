//! In-memory storage backend for testing and demo mode.
//!
//! This module provides an in-memory implementation of the repository traits
//! backed by vectors wrapped in `Arc<RwLock<_>>`. It is used by the handler
//! tests, and main serves it seeded with demo data when built without the
//! `dynamodb` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use moviecast::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::default();
//! // Serve it from an AppState, or query it directly in tests
//! ```

mod repository;

pub use repository::InMemoryRepository;
