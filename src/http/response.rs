//! HTTP response building module
//!
//! Builders for every status this server emits, decoupled from the
//! handlers.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

const ALLOWED_METHODS: &str = "GET, HEAD, POST, DELETE, OPTIONS";

/// Build the 200 listing-page response with an exact Content-Length
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 file download response
pub fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { Bytes::from(data) };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("file", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 201 Created with an empty body (successful upload)
pub fn build_created_response() -> Response<Full<Bytes>> {
    build_empty_response(201)
}

/// Build 200 OK with an empty body (successful delete)
pub fn build_deleted_response() -> Response<Full<Bytes>> {
    build_empty_response(200)
}

/// Build 400 Bad Request with an empty body (no file part in the upload)
pub fn build_bad_upload_response() -> Response<Full<Bytes>> {
    build_empty_response(400)
}

/// Build 404 Not Found with an empty body (delete miss)
pub fn build_not_found_empty_response() -> Response<Full<Bytes>> {
    build_empty_response(404)
}

/// Build 500 Internal Server Error with an empty body
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_empty_response(500)
}

fn build_empty_response(status: u16) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found with a textual message (unreadable directory,
/// unresolvable path)
pub fn build_404_response(message: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(message.to_owned())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("Not Found")))
        })
}

/// Build 405 Method Not Allowed
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", ALLOWED_METHODS)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build the OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", ALLOWED_METHODS);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 413 Payload Too Large
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::Body;

    fn body_len(response: &Response<Full<Bytes>>) -> u64 {
        response.body().size_hint().exact().unwrap_or(0)
    }

    #[test]
    fn test_html_response_content_length_is_exact() {
        let response = build_html_response("hello".to_string(), false);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Length").unwrap(), "5");
        assert_eq!(body_len(&response), 5);
    }

    #[test]
    fn test_head_drops_body_but_keeps_length() {
        let response = build_html_response("hello".to_string(), true);
        assert_eq!(response.headers().get("Content-Length").unwrap(), "5");
        assert_eq!(body_len(&response), 0);
    }

    #[test]
    fn test_empty_status_responses() {
        assert_eq!(build_created_response().status(), 201);
        assert_eq!(build_deleted_response().status(), 200);
        assert_eq!(build_bad_upload_response().status(), 400);
        assert_eq!(build_not_found_empty_response().status(), 404);
        assert_eq!(body_len(&build_created_response()), 0);
        assert_eq!(body_len(&build_bad_upload_response()), 0);
    }

    #[test]
    fn test_404_with_message() {
        let response = build_404_response("No permission to list directory");
        assert_eq!(response.status(), 404);
        assert_eq!(body_len(&response), "No permission to list directory".len() as u64);
    }

    #[test]
    fn test_405_carries_allow_header() {
        let response = build_405_response();
        assert_eq!(response.status(), 405);
        assert!(response.headers().contains_key("Allow"));
    }

    #[test]
    fn test_options_cors_headers() {
        let plain = build_options_response(false);
        assert_eq!(plain.status(), 204);
        assert!(!plain.headers().contains_key("Access-Control-Allow-Origin"));

        let cors = build_options_response(true);
        assert!(cors.headers().contains_key("Access-Control-Allow-Origin"));
    }
}
