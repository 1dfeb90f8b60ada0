//! CLI defaults loaded from `~/.config/urlkit/config.toml`.
//!
//! The core functions take explicit options; only the CLI consults this file
//! to seed flag defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::conn_string::ConnStringOptions;

/// Defaults for connection-string rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlkitConfig {
    /// Key prefix for connection-string segments.
    pub conn_prefix: String,
    /// Separator between connection-string segments.
    pub conn_separator: String,
    /// Whether connection strings end with the full source URL.
    pub conn_include_full_url: bool,
}

impl Default for UrlkitConfig {
    fn default() -> Self {
        Self {
            conn_prefix: "CONN".to_string(),
            conn_separator: "; ".to_string(),
            conn_include_full_url: true,
        }
    }
}

impl UrlkitConfig {
    /// Rendering options seeded from this config.
    pub fn conn_options(&self) -> ConnStringOptions {
        ConnStringOptions {
            prefix: self.conn_prefix.clone(),
            include_full_url: self.conn_include_full_url,
            separator: self.conn_separator.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlkitConfig = toml::from_str(&data)?;
    Ok(cfg)
}
