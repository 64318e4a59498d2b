use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/svdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvdlConfig {
    /// API credential for remote resolution. Missing or short values leave
    /// the tool in demo mode.
    #[serde(default)]
    pub api_key: Option<String>,
    /// How many resolutions the history keeps before pruning the oldest.
    pub history_limit: usize,
    /// Where downloads land when no directory is given on the command line
    /// (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for SvdlConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            history_limit: 20,
            download_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("svdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SvdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SvdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SvdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
