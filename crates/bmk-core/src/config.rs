use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Timestamp stamped on entries when none is configured (2024-01-01 00:00 UTC).
pub const DEFAULT_TIMESTAMP: u64 = 1704067200;

/// Global configuration loaded from `~/.config/bmk/config.toml`.
///
/// Defaults reproduce the original fixed behavior: input and output one level
/// above the working directory, fixed run timestamp. CLI flags override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmkConfig {
    /// Path to the bookmark CSV (relative paths resolve against the cwd).
    pub input_path: PathBuf,
    /// Path the bookmarks HTML document is written to.
    pub output_path: PathBuf,
    /// Unix-epoch seconds used for ADD_DATE/LAST_MODIFIED on every entry.
    pub timestamp: u64,
}

impl Default for BmkConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("../bookmarks.csv"),
            output_path: PathBuf::from("../bookmarks.html"),
            timestamp: DEFAULT_TIMESTAMP,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bmk")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BmkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BmkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BmkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
