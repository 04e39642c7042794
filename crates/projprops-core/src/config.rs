use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use projprops_util::errors::{PropsError, PropsResult};

/// Global user configuration loaded from `~/.projprops/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Properties seeded into every project created by `projprops init`.
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Output settings from `[display]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Mask path-valued properties in `projprops list` unless `--reveal` is given.
    #[serde(default, rename = "mask-paths")]
    pub mask_paths: bool,
}

impl GlobalConfig {
    /// Load the global configuration from `~/.projprops/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> PropsResult<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, or return defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> PropsResult<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| PropsError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            PropsError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the projprops data directory (`~/.projprops/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".projprops")
}
