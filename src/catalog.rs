//! Pricing-config lookup, the boundary with the persistence layer.
//!
//! The admin application stores pricing configs in its own database; the
//! quoting core only ever sees them as an in-memory catalog keyed by id,
//! loaded here from their JSON wire shape.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PricingError, Result};
use crate::model::PricingConfig;

/// In-memory set of pricing configurations keyed by id.
#[derive(Debug, Clone, Default)]
pub struct PricingCatalog {
    configs: HashMap<String, PricingConfig>,
}

impl PricingCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a set of configs.
    pub fn from_configs(configs: impl IntoIterator<Item = PricingConfig>) -> Self {
        let mut catalog = Self::new();
        for config in configs {
            catalog.insert(config);
        }
        catalog
    }

    /// Insert a config, replacing any previous one under the same key.
    pub fn insert(&mut self, config: PricingConfig) {
        self.configs.insert(config.key().to_string(), config);
    }

    /// Look up a config by pricing id.
    pub fn get(&self, pricing_id: &str) -> Option<&PricingConfig> {
        self.configs.get(pricing_id)
    }

    /// Lookup that surfaces the missing-config error, for merchant tooling
    /// that must report broken font linkage.
    pub fn require(&self, pricing_id: &str) -> Result<&PricingConfig> {
        self.get(pricing_id)
            .ok_or_else(|| PricingError::PricingNotFound {
                pricing_id: pricing_id.to_string(),
            })
    }

    /// Number of configs in the catalog.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether the catalog holds no configs.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Iterate over all configs.
    pub fn iter(&self) -> impl Iterator<Item = &PricingConfig> {
        self.configs.values()
    }
}

/// Catalog files hold either a single config or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    One(Box<PricingConfig>),
    Many(Vec<PricingConfig>),
}

/// Load a pricing catalog from a JSON file.
pub fn load_catalog_file(path: &Path) -> Result<PricingCatalog> {
    if !path.exists() {
        return Err(PricingError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(PricingError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let parsed: CatalogFile = serde_json::from_str(&content)?;
    let configs = match parsed {
        CatalogFile::One(config) => vec![*config],
        CatalogFile::Many(configs) => configs,
    };

    Ok(PricingCatalog::from_configs(configs))
}
