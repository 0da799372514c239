//! Access log format module
//!
//! One entry per request, rendered in `common` (CLF) or `combined`
//! (Apache/Nginx) form.

use chrono::Local;
use hyper::Version;

/// Access log entry for a single request/response pair
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version label (1.0, 1.1, 2)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Render according to the configured format name; anything unknown
    /// falls back to `common`.
    pub fn format(&self, format: &str) -> String {
        match format {
            "combined" => self.format_combined(),
            _ => self.format_common(),
        }
    }

    fn request_line(&self) -> String {
        format!(
            "{} {}{} HTTP/{}",
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
        )
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    /// Common format plus quoted referer and user agent
    fn format_combined(&self) -> String {
        format!(
            "{} \"{}\" \"{}\"",
            self.format_common(),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }
}

/// Short HTTP version label for request lines
pub fn version_label(version: Version) -> String {
    if version == Version::HTTP_11 {
        "1.1".to_string()
    } else if version == Version::HTTP_10 {
        "1.0".to_string()
    } else if version == Version::HTTP_2 {
        "2".to_string()
    } else {
        format!("{version:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        AccessLogEntry {
            remote_addr: "192.168.1.1".to_string(),
            time: Local::now(),
            method: "DELETE".to_string(),
            path: "/delete".to_string(),
            query: Some("filename=test.txt".to_string()),
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: Some("http://localhost:8888/".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
            request_time_us: 1500,
        }
    }

    #[test]
    fn test_format_common() {
        let entry = create_test_entry();
        let line = entry.format("common");
        assert!(line.contains("192.168.1.1"));
        assert!(line.contains("DELETE /delete?filename=test.txt HTTP/1.1"));
        assert!(line.contains("200 0"));
        // Common format carries no referer or user agent
        assert!(!line.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_format_combined() {
        let entry = create_test_entry();
        let line = entry.format("combined");
        assert!(line.contains("DELETE /delete?filename=test.txt HTTP/1.1"));
        assert!(line.contains("\"http://localhost:8888/\""));
        assert!(line.contains("\"Mozilla/5.0\""));
    }

    #[test]
    fn test_unknown_format_falls_back_to_common() {
        let entry = create_test_entry();
        assert_eq!(entry.format("json"), entry.format("common"));
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }
}
