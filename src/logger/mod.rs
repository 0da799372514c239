//! Logger module
//!
//! Stdout/stderr logging helpers: server lifecycle, warnings and errors,
//! and formatted access log lines.

mod format;

pub use format::{version_label, AccessLogEntry};

use std::net::SocketAddr;

use crate::config::AppState;

pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    println!("======================================");
    println!("Async server started successfully");
    println!("Listening on: http://{addr}");
    println!("Serving directory: {}", state.served_root.display());
    println!("Log level: {}", state.config.logging.level);
    if let Some(workers) = state.config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_upload(filename: &str, body_bytes: usize) {
    println!("[Upload] Stored '{filename}' ({body_bytes} byte body)");
}

pub fn log_delete(filename: &str) {
    println!("[Delete] Removed '{filename}'");
}

/// Write one formatted access log line
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Stop signal received, closing listener");
}
