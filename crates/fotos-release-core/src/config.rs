use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPOSITORY: &str = "charly-vibes/fotos";
pub const DEFAULT_LICENSE: &str = "MIT";
pub const DEFAULT_DESKTOP_DESCRIPTION: &str = "AI-powered screenshot capture and analysis tool";
pub const DEFAULT_MCP_DESCRIPTION: &str = "MCP server for Fotos — AI-powered screenshot tool";

/// Packaging metadata loaded from `~/.config/fotos-release/config.toml`.
///
/// Every field is optional in the file; anything missing falls back to the
/// values the public Fotos releases are published with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// GitHub `owner/name` that hosts the release assets.
    pub repository: String,
    /// SPDX license identifier written into formula and Scoop manifests.
    pub license: String,
    /// Description for the desktop app (cask and Scoop desktop manifest).
    pub desktop_description: String,
    /// Description for the MCP server (formula and Scoop MCP manifest).
    pub mcp_description: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            desktop_description: DEFAULT_DESKTOP_DESCRIPTION.to_string(),
            mcp_description: DEFAULT_MCP_DESCRIPTION.to_string(),
        }
    }
}

impl ReleaseConfig {
    pub fn homepage(&self) -> String {
        format!("https://github.com/{}", self.repository)
    }
}

/// Location of the user config file, if one exists.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fotos-release")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Parse a config file. The file must exist.
pub fn load_from(path: &Path) -> Result<ReleaseConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ReleaseConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration: an explicit path wins, then the XDG config file, then defaults.
///
/// Never creates a config file; release pipelines run with a read-only view of `$HOME`.
pub fn load(explicit: Option<&Path>) -> Result<ReleaseConfig> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match config_path()? {
        Some(path) => {
            tracing::debug!("using config at {}", path.display());
            load_from(&path)
        }
        None => Ok(ReleaseConfig::default()),
    }
}
