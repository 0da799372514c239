//! Request handler module
//!
//! The routing table and the listing, download, upload, and delete
//! operations it dispatches to.

pub mod delete;
pub mod download;
pub mod listing;
pub mod router;
pub mod template;
pub mod upload;

// Re-export main entry point
pub use router::handle_request;
