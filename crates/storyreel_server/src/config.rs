//! Server configuration.

use std::path::PathBuf;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:8000")
    pub addr: String,
    /// Directory backing the public `/videos` prefix
    pub media_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8000".to_string(),
            media_root: PathBuf::from("./media/videos"),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new(addr: impl Into<String>, media_root: impl Into<PathBuf>) -> Self {
        Self {
            addr: addr.into(),
            media_root: media_root.into(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `STORYREEL_ADDR` (default: "0.0.0.0:8000")
    /// - `STORYREEL_MEDIA_ROOT` (default: "./media/videos")
    pub fn from_env() -> Self {
        let addr =
            std::env::var("STORYREEL_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let media_root = std::env::var("STORYREEL_MEDIA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./media/videos"));

        Self { addr, media_root }
    }
}
