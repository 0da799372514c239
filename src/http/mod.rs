//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the handlers: multipart parsing, query
//! extraction, Content-Type lookup, and response builders.

pub mod mime;
pub mod multipart;
pub mod query;
pub mod response;

// Re-export the builders the router reaches for directly
pub use response::{build_404_response, build_405_response, build_413_response, build_options_response};
