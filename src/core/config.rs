//! core/config.rs
//! Static application configuration.
//!
//! Read once at startup from `config.toml` under the platform config dir,
//! with `RETROPULSE_*` environment variables layered on top. A missing or
//! broken file is never fatal — the app falls back to defaults and says so in
//! the log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Present the classic skinned shell instead of the modern surface.
    pub use_classic_skin: bool,
    /// Directory holding `atlas.json` + the packed skin image.
    pub skin_path: Option<PathBuf>,
    /// Render the skinned shell at 2x.
    pub double_size: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_classic_skin: false,
            skin_path: None,
            double_size: false,
        }
    }
}

impl AppConfig {
    fn file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("RETROPULSE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("retropulse").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let mut config = match Self::file_path() {
            Some(path) if path.is_file() => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
            }
            _ => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config unreadable, using defaults: {err:#}");
                let mut config = Self::default();
                config.apply_env_overrides();
                config
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("RETROPULSE_USE_CLASSIC_SKIN") {
            self.use_classic_skin = matches!(v.as_str(), "1" | "true" | "yes");
        }
        if let Ok(v) = std::env::var("RETROPULSE_SKIN_PATH") {
            self.skin_path = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var("RETROPULSE_DOUBLE_SIZE") {
            self.double_size = matches!(v.as_str(), "1" | "true" | "yes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_prefer_the_modern_surface() {
        let config = AppConfig::default();
        assert!(!config.use_classic_skin);
        assert!(config.skin_path.is_none());
        assert!(!config.double_size);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str("use_classic_skin = true").unwrap();
        assert!(config.use_classic_skin);
        assert!(config.skin_path.is_none());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig {
            use_classic_skin: true,
            skin_path: Some(PathBuf::from("/skins/base")),
            double_size: true,
        };
        let raw = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back.use_classic_skin, config.use_classic_skin);
        assert_eq!(back.skin_path, config.skin_path);
        assert_eq!(back.double_size, config.double_size);
    }
}
