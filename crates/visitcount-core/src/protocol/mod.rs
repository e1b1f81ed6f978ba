//! Invocation contract (event in, response out).
//!
//! The handler is hosted behind an HTTP-style function invocation API:
//! - `event`: an object with an optional `body` that is either a JSON string
//!   or an already-decoded JSON value.
//! - `response`: `statusCode`, optional `headers`, and a JSON-encoded `body`.
//!
//! Decoding is panic-free: anything malformed is reported as
//! `VisitCountError` and turned into a response by the caller.

pub mod event;
pub mod response;

pub use event::{EventBody, InvocationEvent, RequestBody};
pub use response::{ErrorBody, InvocationResponse, VisitBody};
