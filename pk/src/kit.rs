//! Kit Loader
//!
//! Loads named kits from YAML files or falls back to embedded defaults.
//!
//! Loading chain:
//! 1. `{kits_dir}/{name}.yml`
//! 2. Embedded fallback in code

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::embedded;
use crate::template::Template;

/// File extension for kit files
pub const KIT_EXTENSION: &str = "yml";

/// Errors that can occur while loading kits
#[derive(Debug, Error)]
pub enum KitError {
    #[error("Kit not found: {name}")]
    NotFound { name: String },

    #[error("Failed to read kit {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse kit {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid kit {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// A named template ready to render
#[derive(Debug, Clone, Serialize)]
pub struct Kit {
    pub name: String,
    pub description: String,
    pub template: Template,
}

impl Kit {
    /// Render this kit's template from a comma-separated input string
    pub fn render(&self, raw_input: &str) -> String {
        debug!(kit = %self.name, "Kit::render: called");
        self.template.render(raw_input)
    }
}

/// On-disk form of a kit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitFile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub placeholders: Vec<String>,
    pub template: String,
}

impl KitFile {
    fn into_kit(self, path: &Path) -> Result<Kit, KitError> {
        if self.placeholders.is_empty() {
            return Err(KitError::Invalid {
                path: path.to_path_buf(),
                reason: "no placeholders declared".to_string(),
            });
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            && stem != self.name
        {
            return Err(KitError::Invalid {
                path: path.to_path_buf(),
                reason: format!("name '{}' does not match file name '{}'", self.name, stem),
            });
        }
        Ok(Kit {
            name: self.name,
            description: self.description,
            template: Template::new(self.template, self.placeholders),
        })
    }
}

/// Where a kit was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KitSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for KitSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Kit listing entry
#[derive(Debug, Clone, Serialize)]
pub struct KitSummary {
    pub name: String,
    pub description: String,
    pub source: KitSource,
}

/// Resolves kits by name
pub struct KitLoader {
    /// Directory holding `{name}.yml` kit files
    kits_dir: Option<PathBuf>,
}

impl KitLoader {
    /// Create a loader that checks `kits_dir` before the embedded kits
    pub fn new(kits_dir: Option<PathBuf>) -> Self {
        debug!(?kits_dir, "KitLoader::new: called");
        let kits_dir = kits_dir.filter(|dir| {
            let exists = dir.is_dir();
            if !exists {
                debug!(?dir, "KitLoader::new: kits directory does not exist");
            }
            exists
        });
        Self { kits_dir }
    }

    /// Create a loader that only uses embedded kits
    pub fn embedded_only() -> Self {
        debug!("KitLoader::embedded_only: called");
        Self { kits_dir: None }
    }

    fn kit_path(&self, name: &str) -> Option<PathBuf> {
        self.kits_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.{}", name, KIT_EXTENSION)))
    }

    /// Load a kit by name
    pub fn load(&self, name: &str) -> Result<Kit, KitError> {
        debug!(%name, "KitLoader::load: called");
        if let Some(path) = self.kit_path(name)
            && path.exists()
        {
            debug!(?path, "KitLoader::load: found kit file");
            let kit = load_file(&path)?;
            info!("Loaded kit '{}' from {}", name, path.display());
            return Ok(kit);
        }

        debug!("KitLoader::load: trying embedded fallback");
        embedded::get_embedded(name).ok_or_else(|| KitError::NotFound { name: name.to_string() })
    }

    /// List every kit this loader can resolve, sorted by name
    ///
    /// File kits shadow embedded kits with the same name.
    pub fn list(&self) -> Result<Vec<KitSummary>, KitError> {
        debug!("KitLoader::list: called");
        let mut kits = BTreeMap::new();

        for name in embedded::embedded_names() {
            if let Some(kit) = embedded::get_embedded(name) {
                kits.insert(
                    kit.name.clone(),
                    KitSummary {
                        name: kit.name,
                        description: kit.description,
                        source: KitSource::Embedded,
                    },
                );
            }
        }

        if let Some(dir) = &self.kits_dir {
            let entries = fs::read_dir(dir).map_err(|source| KitError::Io {
                path: dir.clone(),
                source,
            })?;
            for entry in entries {
                let path = entry
                    .map_err(|source| KitError::Io {
                        path: dir.clone(),
                        source,
                    })?
                    .path();
                if path.extension().and_then(|e| e.to_str()) != Some(KIT_EXTENSION) {
                    continue;
                }
                let kit = load_file(&path)?;
                kits.insert(
                    kit.name.clone(),
                    KitSummary {
                        name: kit.name,
                        description: kit.description,
                        source: KitSource::File(path),
                    },
                );
            }
        }

        Ok(kits.into_values().collect())
    }
}

/// Read and validate a single kit file
pub fn load_file(path: &Path) -> Result<Kit, KitError> {
    debug!(?path, "load_file: called");
    let content = fs::read_to_string(path).map_err(|source| KitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: KitFile = serde_yaml::from_str(&content).map_err(|source| KitError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    file.into_kit(path)
}
