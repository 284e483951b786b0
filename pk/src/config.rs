//! Configuration for promptkit

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::embedded::REAL_ESTATE_FOLLOWUP_NAME;

/// Project-local config file name
pub const LOCAL_CONFIG: &str = "promptkit.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `{name}.yml` kit files
    #[serde(rename = "kits-dir")]
    pub kits_dir: PathBuf,

    /// Kit used when `--kit` is not given
    #[serde(rename = "default-kit")]
    pub default_kit: String,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

fn config_home() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("promptkit")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kits_dir: config_home().join("kits"),
            default_kit: REAL_ESTATE_FOLLOWUP_NAME.to_string(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load config with fallback chain
    ///
    /// 1. Explicit path (errors are fatal)
    /// 2. `./promptkit.yml`
    /// 3. `~/.config/promptkit/promptkit.yml`
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let candidates = [Some(PathBuf::from(LOCAL_CONFIG)), Some(config_home().join(LOCAL_CONFIG))];
        for path in candidates.iter().flatten() {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, ignoring any load errors
    ///
    /// Used before logging is initialized.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
