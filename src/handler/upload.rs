//! Upload processing module
//!
//! Accepts a buffered multipart/form-data body, extracts the first
//! file-bearing part, and writes it into the served root.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::http::{multipart, response};
use crate::logger;

/// Outcome of storing an upload body.
#[derive(Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// A file part was found and written under this name.
    Created(String),
    /// No part carried a `filename=` attribute; nothing was written.
    NoFilePart,
}

/// Handle a POST body against the served root: 201 empty on success, 400
/// empty when no file part was found.
pub async fn handle_upload(
    served_root: &Path,
    content_type: Option<&str>,
    body: &[u8],
) -> Response<Full<Bytes>> {
    match store_upload(served_root, content_type, body).await {
        Ok(UploadOutcome::Created(filename)) => {
            logger::log_upload(&filename, body.len());
            response::build_created_response()
        }
        Ok(UploadOutcome::NoFilePart) => response::build_bad_upload_response(),
        Err(e) => {
            logger::log_error(&format!("Failed to write upload: {e}"));
            response::build_500_response()
        }
    }
}

/// Extract the first file part and write it relative to the served root.
///
/// The filename is used exactly as the client sent it; an existing file of
/// the same name is overwritten in place.
pub async fn store_upload(
    served_root: &Path,
    content_type: Option<&str>,
    body: &[u8],
) -> std::io::Result<UploadOutcome> {
    let Some(part) = content_type
        .and_then(multipart::boundary)
        .and_then(|boundary| multipart::extract_file_part(body, boundary))
    else {
        return Ok(UploadOutcome::NoFilePart);
    };

    fs::write(served_root.join(&part.filename), &part.content).await?;
    Ok(UploadOutcome::Created(part.filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: &str = "----FormBoundary77";
    const CONTENT_TYPE: &str = "multipart/form-data; boundary=----FormBoundary77";

    fn upload_body(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (filename, content) in files {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\r\n")
                    .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    #[tokio::test]
    async fn test_upload_round_trip() {
        let root = tempfile::tempdir().unwrap();
        let body = upload_body(&[("test.txt", b"hello")]);

        let outcome = store_upload(root.path(), Some(CONTENT_TYPE), &body)
            .await
            .unwrap();
        assert_eq!(outcome, UploadOutcome::Created("test.txt".to_string()));
        assert_eq!(std::fs::read(root.path().join("test.txt")).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_upload_overwrites_existing_file() {
        let root = tempfile::tempdir().unwrap();

        let first = upload_body(&[("test.txt", b"A")]);
        store_upload(root.path(), Some(CONTENT_TYPE), &first)
            .await
            .unwrap();

        let second = upload_body(&[("test.txt", b"B")]);
        store_upload(root.path(), Some(CONTENT_TYPE), &second)
            .await
            .unwrap();

        assert_eq!(std::fs::read(root.path().join("test.txt")).unwrap(), b"B");
    }

    #[tokio::test]
    async fn test_only_first_file_part_is_written() {
        let root = tempfile::tempdir().unwrap();
        let body = upload_body(&[("a.txt", b"first"), ("b.txt", b"second")]);

        let outcome = store_upload(root.path(), Some(CONTENT_TYPE), &body)
            .await
            .unwrap();
        assert_eq!(outcome, UploadOutcome::Created("a.txt".to_string()));
        assert!(root.path().join("a.txt").is_file());
        assert!(!root.path().join("b.txt").exists());
    }

    #[tokio::test]
    async fn test_no_file_part_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("keep.txt"), b"untouched").unwrap();

        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"comment\"\r\n\r\n");
        body.extend_from_slice(b"field only\r\n");
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let outcome = store_upload(root.path(), Some(CONTENT_TYPE), &body)
            .await
            .unwrap();
        assert_eq!(outcome, UploadOutcome::NoFilePart);

        // Nothing new was created and existing files are untouched
        let entries: Vec<_> = std::fs::read_dir(root.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("keep.txt")]);
        assert_eq!(std::fs::read(root.path().join("keep.txt")).unwrap(), b"untouched");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        let body = upload_body(&[("test.txt", b"hello")]);

        let outcome = store_upload(root.path(), None, &body).await.unwrap();
        assert_eq!(outcome, UploadOutcome::NoFilePart);
        assert!(!root.path().join("test.txt").exists());
    }

    #[tokio::test]
    async fn test_handler_maps_outcomes_to_statuses() {
        let root = tempfile::tempdir().unwrap();

        let good = upload_body(&[("x.bin", b"\x01\x02")]);
        let response = handle_upload(root.path(), Some(CONTENT_TYPE), &good).await;
        assert_eq!(response.status(), 201);

        let response = handle_upload(root.path(), Some("text/plain"), b"junk").await;
        assert_eq!(response.status(), 400);
    }
}
