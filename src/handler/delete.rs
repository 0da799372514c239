//! Delete processing module
//!
//! Removes the file named by the `filename` query parameter, resolved
//! against the served root.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::http::{query, response};
use crate::logger;

/// Outcome of a delete request.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    /// Missing parameter or no entry by that name.
    Miss,
}

/// Handle a DELETE request: 200 empty on removal, 404 empty on a miss.
pub async fn handle_delete(served_root: &Path, raw_query: Option<&str>) -> Response<Full<Bytes>> {
    match remove_named_file(served_root, raw_query).await {
        Ok(DeleteOutcome::Deleted(filename)) => {
            logger::log_delete(&filename);
            response::build_deleted_response()
        }
        Ok(DeleteOutcome::Miss) => response::build_not_found_empty_response(),
        Err(e) => {
            logger::log_error(&format!("Failed to delete file: {e}"));
            response::build_500_response()
        }
    }
}

/// Remove the entry named by the query's first `filename` value.
///
/// The name is joined onto the served root exactly as supplied;
/// parent-directory segments are not rejected.
pub async fn remove_named_file(
    served_root: &Path,
    raw_query: Option<&str>,
) -> std::io::Result<DeleteOutcome> {
    let Some(filename) = raw_query.and_then(|q| query::first_param(q, "filename")) else {
        return Ok(DeleteOutcome::Miss);
    };

    let path = served_root.join(&filename);
    if !path.exists() {
        return Ok(DeleteOutcome::Miss);
    }

    fs::remove_file(&path).await?;
    Ok(DeleteOutcome::Deleted(filename))
}
