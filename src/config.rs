//! Application configuration.
//!
//! The configuration is loaded from
//! `$XDG_CONFIG_HOME/hyprsnap/config.json`.  The top-level schema uses
//! named sections so the file can be extended later without breaking
//! backward compatibility.
//!
//! # Example
//!
//! ```json
//! {
//!   "socket": "/run/user/1000/hyprsnap.sock",
//!   "registry": { "max_tracked": 128 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Override for the command socket path.  Defaults to
    /// `$XDG_RUNTIME_DIR/hyprsnap.sock` when absent.
    #[serde(default)]
    pub socket: Option<String>,

    /// Window registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Settings for the per-window state registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum number of windows tracked before least-recently-used records
    /// are evicted.
    pub max_tracked: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { max_tracked: 256 }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
