//! Translation catalogs loaded from JSON.
//!
//! A catalog file maps locales to key/value tables:
//!
//! ```json
//! { "en": { "nav.home": "Home" }, "fr": { "nav.home": "Accueil" } }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use store::models::Translation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Empty locale in catalog")]
    EmptyLocale,
    #[error("Empty key in locale {0}")]
    EmptyKey(String),
}

/// Locale -> key -> value. `BTreeMap` keeps entries in a stable order.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

impl TranslationCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let locales: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)?;

        for (locale, entries) in &locales {
            if locale.trim().is_empty() {
                return Err(CatalogError::EmptyLocale);
            }
            if entries.keys().any(|key| key.trim().is_empty()) {
                return Err(CatalogError::EmptyKey(locale.clone()));
            }
        }

        Ok(Self { locales })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }

    pub fn len(&self) -> usize {
        self.locales.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the catalog into rows ordered by locale, then key.
    pub fn entries(&self) -> Vec<Translation> {
        self.locales
            .iter()
            .flat_map(|(locale, entries)| {
                entries
                    .iter()
                    .map(move |(key, value)| Translation::new(locale, key, value))
            })
            .collect()
    }
}
