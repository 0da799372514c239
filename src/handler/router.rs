//! Request routing dispatch module
//!
//! Entry point for request processing: method gating, body-size gating, and
//! the {method, path} dispatch table.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response};

use crate::config::AppState;
use crate::handler::{delete, download, listing, upload};
use crate::http::{self, response};
use crate::logger;
use crate::logger::AccessLogEntry;

/// Main entry point for request handling
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();
    let is_head = method == Method::HEAD;

    // 1. Method gate
    if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Body size gate
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 3. Header logging if enabled
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let content_type = header_string(&req, "content-type");
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");

    // 4. Dispatch on {method, path}
    let response = match method {
        Method::GET | Method::HEAD => serve_path(&state, uri.path(), is_head).await,
        Method::POST => {
            // Uploads are fully buffered before parsing
            match req.collect().await {
                Ok(collected) => {
                    upload::handle_upload(
                        &state.served_root,
                        content_type.as_deref(),
                        &collected.to_bytes(),
                    )
                    .await
                }
                Err(e) => {
                    logger::log_error(&format!("Failed to read request body: {e}"));
                    response::build_bad_upload_response()
                }
            }
        }
        Method::DELETE => delete::handle_delete(&state.served_root, uri.query()).await,
        _ => http::build_405_response(),
    };

    if state.config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.ip().to_string(),
            time: chrono::Local::now(),
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(ToString::to_string),
            http_version: logger::version_label(version),
            status: response.status().as_u16(),
            body_bytes: body_len(&response),
            referer,
            user_agent,
            request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Gate on method: OPTIONS is answered directly, unsupported methods get 405
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD | &Method::POST | &Method::DELETE => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(req: &Request<Incoming>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Resolve a GET/HEAD path against the served root and dispatch:
/// directory → listing, file → download, neither → 404.
async fn serve_path(state: &Arc<AppState>, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let Some(target) = resolve_path(&state.served_root, path) else {
        return http::build_404_response("File not found");
    };

    if target.is_dir() {
        listing::serve_listing(&target, is_head).await
    } else if target.is_file() {
        download::serve_file(&target, is_head).await
    } else {
        http::build_404_response("File not found")
    }
}

/// Percent-decode the URL path and join it onto the served root. Names are
/// joined as-is; no canonicalization is applied.
fn resolve_path(served_root: &Path, path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(path).ok()?;
    Some(served_root.join(decoded.trim_start_matches('/')))
}

fn header_string(req: &Request<Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn body_len(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body as _;
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}
