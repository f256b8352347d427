//! Catalog files.
//!
//! A catalog can be supplied as YAML:
//!
//! ```yaml
//! default: pro
//! plans:
//!   - id: basic
//!     name: Basic
//!     credits: 1312
//!     price: "$50"
//!     description: Ideal for getting started
//!     features: ["Unused credits roll over"]
//! ```
//!
//! Resolution: an explicit path, else `<config_dir>/credcalc/catalog.yaml`
//! when present, else the built-in catalog.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::types::Plan;

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub plans: Vec<Plan>,
}

impl From<&Catalog> for CatalogFile {
    fn from(catalog: &Catalog) -> Self {
        Self {
            default: Some(catalog.default_id().to_string()),
            plans: catalog.plans().to_vec(),
        }
    }
}

/// Parse and validate a catalog from a YAML string.
pub fn parse_catalog(yaml: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_yaml::from_str(yaml)?;
    Catalog::new(file.plans, file.default)
}

/// Load and validate a catalog from a YAML file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&content)?;
    tracing::info!(path = %path.display(), plans = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Serialize a catalog in the same YAML shape [`parse_catalog`] reads.
pub fn to_yaml(catalog: &Catalog) -> Result<String> {
    Ok(serde_yaml::to_string(&CatalogFile::from(catalog))?)
}

/// Per-user catalog location: `<config_dir>/credcalc/catalog.yaml`.
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("credcalc").join("catalog.yaml"))
}

/// Pick the catalog for this process: explicit path, user file, or built-in.
pub fn resolve_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = explicit {
        return load_catalog(path);
    }
    match default_catalog_path() {
        Some(path) if path.is_file() => load_catalog(&path),
        _ => {
            tracing::debug!("using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}
