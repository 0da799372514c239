// Application state module
// Immutable state shared across connection tasks

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// Configuration is fixed at process start. The served root is resolved once
/// here and passed explicitly into every filesystem operation instead of
/// relying on the process working directory.
pub struct AppState {
    pub config: Config,
    pub served_root: PathBuf,
}

impl AppState {
    pub fn new(config: Config, served_root: PathBuf) -> Self {
        Self {
            config,
            served_root,
        }
    }
}
