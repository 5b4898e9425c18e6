//! Functional core for the moviecast service.
//!
//! Pure domain types, query-parameter resolution and error mapping. Nothing
//! in this crate performs I/O; storage backends live in the `moviecast`
//! binary and implement the traits from [`storage`].

pub mod movie;
pub mod storage;
