use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shelf_library::{LoadPolicy, StoreConfig};

/// Configuration file looked up in the working directory when `--config`
/// is not given.
pub const DEFAULT_CONFIG_FILE: &str = "shelf.toml";

/// Settings read from `shelf.toml`.
///
/// ```toml
/// library_path = "/home/me/books.json"
/// strict = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    /// Catalog file location.
    pub library_path: Option<PathBuf>,
    /// Fail instead of starting empty when the catalog cannot be parsed.
    pub strict: bool,
}

impl ShelfConfig {
    /// Load from `explicit` if given, else from `./shelf.toml` if it exists,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Resolve the store configuration.
    ///
    /// Precedence for the path: `--library` (or `SHELF_LIBRARY`), then the
    /// config file, then the built-in default. `--strict` on the command line
    /// can only turn strict loading on.
    pub fn store_config(&self, library: Option<PathBuf>, strict: bool) -> StoreConfig {
        let mut config = StoreConfig::default();
        if let Some(path) = library.or_else(|| self.library_path.clone()) {
            config.path = path;
        }
        if strict || self.strict {
            config.load_policy = LoadPolicy::Strict;
        }
        config
    }
}
