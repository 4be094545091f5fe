// JSON type manifest
//
// The manifest is written by a separate reflection step over the compiled
// library. Shape:
//
//   { "library": "AltV.Net", "types": [ <TypeDescriptor>, ... ] }

use super::{TypeCatalog, TypeDescriptor};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A catalog read from a type manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestCatalog {
    /// Display name of the described library
    pub library: Option<String>,
    pub types: Vec<TypeDescriptor>,
}

impl ManifestCatalog {
    /// Load a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::PathNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| Error::manifest(path, e))
    }

    /// Parse a manifest from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TypeCatalog for ManifestCatalog {
    fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }
}
