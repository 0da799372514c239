// Configuration module entry point
// Loads layered configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::PathBuf;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, StorageConfig};

impl Config {
    /// Load configuration from the specified file path (without extension).
    /// A missing file is not an error; defaults and `DROPDIR_*` environment
    /// variables fill the gaps.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DROPDIR").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8888)?
            .set_default("storage.root", ".")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 300)?
            .set_default("performance.write_timeout", 300)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_073_741_824)? // 1 GiB, uploads are fully buffered
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// The directory all file operations resolve against.
    pub fn served_root(&self) -> PathBuf {
        PathBuf::from(&self.storage.root)
    }
}
