//! visitcount gateway library entry.
//!
//! This crate wires the visit handler, the key-value store backends, config
//! loading, and the HTTP hosting adapter into a deployable service. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handler;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
pub mod transport;
