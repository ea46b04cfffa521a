use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

// =============================================================================
// Property names
// =============================================================================

/// Property holding the full runtime version, e.g. `1.8.0_25`
pub const DEFAULT_VERSION_PROPERTY: &str = "JAVA_VERSION";

/// Property holding the specification version only, e.g. `1.8`
pub const DEFAULT_SPECIFICATION_VERSION_PROPERTY: &str = "JAVA_SPECIFICATION_VERSION";

/// Environment variable controlling the log filter of the binary
pub const LOG_FILTER_ENV: &str = "JAVA_VERSION_LOG";

/// Runtime version resolution configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Property consulted first
    pub version_property: String,
    /// Fallback property
    pub specification_version_property: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            version_property: DEFAULT_VERSION_PROPERTY.to_string(),
            specification_version_property: DEFAULT_SPECIFICATION_VERSION_PROPERTY.to_string(),
        }
    }
}

/// Load a [`ResolverConfig`] from a JSON file. Missing fields use defaults.
pub fn load_config(path: &Path) -> anyhow::Result<ResolverConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Returns the path to the data directory for java-version.
/// Uses $XDG_DATA_HOME/java-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/java-version,
/// or ./java-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("java-version.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("java-version")
}
