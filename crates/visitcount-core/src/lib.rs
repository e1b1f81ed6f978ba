//! visitcount core: transport-agnostic contracts for the visit counter.
//!
//! This crate defines the invocation event/response shapes, path
//! normalization, store-number coercion and the error surface shared by the
//! gateway and its tests. It carries no transport, storage or runtime
//! dependencies so the handler contract can be exercised in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed payloads surface as `VisitCountError` values, never as crashes.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod count;
pub mod error;
pub mod path;
pub mod protocol;

/// Shared result type.
pub use error::{Result, VisitCountError};
