//! Hosting adapters that turn transport requests into invocation events.

pub mod http;
