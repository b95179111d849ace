//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::PadError;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Bundled resource namespace.
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Network resolution stage.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Board surface defaults.
    #[serde(default)]
    pub board: BoardConfig,
}

/// Where bundled images live.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Namespace root directory.
    pub root: PathBuf,
    /// Package directory inside the root used for relative lookups.
    pub package: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self { root: PathBuf::from("assets"), package: "drawpad".to_string() }
    }
}

/// Network stage settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Whether URI designators are fetched at all.
    pub enabled: bool,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { enabled: true, timeout_secs: 10 }
    }
}

impl NetworkConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Board surface defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Background color (`#rrggbb` or `#rrggbbaa`).
    pub background: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { width: 640, height: 480, background: "#ffffff".to_string() }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, PadError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PadError::Config(format!("Failed to read config {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| PadError::Config(format!("Failed to parse config {}: {e}", path.display())))
    }

    /// Resource root, preferring the `DRAWPAD_RESOURCES` environment variable.
    #[must_use]
    pub fn resource_root(&self) -> PathBuf {
        std::env::var_os("DRAWPAD_RESOURCES")
            .map_or_else(|| self.resources.root.clone(), PathBuf::from)
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `DRAWPAD_CONFIG` environment variable
/// 3. `~/.config/drawpad/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("DRAWPAD_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/drawpad/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/drawpad/config.toml")
    } else {
        PathBuf::from("drawpad.toml")
    }
}
