use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One store tracked by the aggregator.
///
/// The registry only describes where a store's already-fetched feed
/// snapshot lives; fetching itself happens upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name, e.g. `"Queen Beauty"`.
    pub name: String,
    /// Path to the store's feed snapshot (JSON array of listings),
    /// relative to the registry file's directory unless absolute.
    pub feed: PathBuf,
    /// ISO 4217 currency code for the store's prices.
    pub currency: Option<String>,
    pub notes: Option<String>,
}

impl StoreConfig {
    /// Generate a URL-safe slug from the store name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct StoresFile {
    pub stores: Vec<StoreConfig>,
}

/// Load and validate the store registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_stores(path: &Path) -> Result<StoresFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StoresFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let stores_file: StoresFile =
        serde_yaml::from_str(&content).map_err(ConfigError::StoresFileParse)?;

    validate_stores(&stores_file)?;

    Ok(stores_file)
}

fn validate_stores(stores_file: &StoresFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for store in &stores_file.stores {
        if store.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store name must be non-empty".to_string(),
            ));
        }

        if store.feed.as_os_str().is_empty() {
            return Err(ConfigError::Validation(format!(
                "store '{}' has an empty feed path",
                store.name
            )));
        }

        let lower_name = store.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate store name: '{}'",
                store.name
            )));
        }

        let slug = store.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate store slug: '{}' (from store '{}')",
                slug, store.name
            )));
        }
    }

    Ok(())
}
