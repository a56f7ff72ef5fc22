//! Server configuration.
//!
//! Read from an optional TOML file; every field has a default so a partial
//! file (or none) is fine. CLI flags are applied on top by the binary.

use std::path::Path;

use halcms_hal::links::DEFAULT_BASE_PATH;
use halcms_types::ApiVersion;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind: String,
    pub port: u16,
    /// Prefix in front of `rest/v{n}`.
    pub base_path: String,
    pub api_version: u32,
    /// Page size for paged listings that do not name one.
    pub default_page_size: u64,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            base_path: DEFAULT_BASE_PATH.to_string(),
            api_version: 1,
            default_page_size: halcms_api::DEFAULT_PAGE_SIZE,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is
    /// logged and also yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ServerConfig>(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn api_version(&self) -> halcms_types::Result<ApiVersion> {
        ApiVersion::new(self.api_version)
    }

    /// `bind:port`, as accepted by `TcpListener::bind`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
