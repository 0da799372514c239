//! File download module
//!
//! GET on a path naming a file returns its raw bytes with an
//! extension-derived Content-Type.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::http::{mime, response};

/// Serve the file's bytes, or 404 when it cannot be read.
pub async fn serve_file(path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(data) => {
            let content_type = mime::content_type_for(path.extension().and_then(|e| e.to_str()));
            response::build_file_response(data, content_type, is_head)
        }
        Err(_) => response::build_404_response("File not found"),
    }
}
