use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::template::ValidationMode;

/// Global configuration loaded from `~/.config/urlt/config.toml`.
///
/// The validation mode is read once per invocation and passed explicitly
/// into the formatter; there is no ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrltConfig {
    /// How inline-pattern mismatches are handled: "fail", "warn", or "ignore".
    #[serde(default)]
    pub validation_mode: ValidationMode,
    /// Optional root path stripped from tokens before canonicalization and
    /// re-attached on reconstruction.
    #[serde(default)]
    pub root_path: Option<String>,
}

impl Default for UrltConfig {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::Fail,
            root_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlt")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrltConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrltConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrltConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrltConfig::default();
        assert_eq!(cfg.validation_mode, ValidationMode::Fail);
        assert!(cfg.root_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrltConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrltConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.validation_mode, cfg.validation_mode);
        assert_eq!(parsed.root_path, cfg.root_path);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            validation_mode = "warn"
            root_path = "/api"
        "#;
        let cfg: UrltConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.validation_mode, ValidationMode::Warn);
        assert_eq!(cfg.root_path.as_deref(), Some("/api"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: UrltConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.validation_mode, ValidationMode::Fail);
        assert!(cfg.root_path.is_none());
    }
}
