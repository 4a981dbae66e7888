use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name used when no catalog location is configured.
pub const DEFAULT_CATALOG_FILE: &str = "books_data.json";

/// How [`JsonFileStore`](crate::JsonFileStore) treats a catalog file that
/// exists but cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Log a warning and load an empty collection.
    #[default]
    Lenient,
    /// Fail with [`StoreError::Corrupt`](crate::StoreError::Corrupt).
    Strict,
}

/// Configuration for the file-backed catalog store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Location of the catalog file.
    pub path: PathBuf,
    /// Handling of unparsable catalog files.
    #[serde(default)]
    pub load_policy: LoadPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_FILE),
            load_policy: LoadPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Lenient configuration for the given catalog path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Same configuration with a different load policy.
    pub fn with_load_policy(mut self, load_policy: LoadPolicy) -> Self {
        self.load_policy = load_policy;
        self
    }
}
