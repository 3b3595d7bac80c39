//! Configuration file loading (mdpress.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (mdpress.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Deserialize)]
pub struct PathsConfig {
    /// Base root containing all convertible documents
    #[serde(default = "default_base")]
    pub base: String,

    /// Output root the converted tree is mirrored under
    #[serde(default = "default_output")]
    pub output: String,

    /// Directory searched when no paths are given on the command line
    #[serde(default = "default_source")]
    pub default_source: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            output: default_output(),
            default_source: default_source(),
        }
    }
}

fn default_base() -> String {
    ".".to_string()
}
fn default_output() -> String {
    "html".to_string()
}
fn default_source() -> String {
    "docs".to_string()
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
