//! Guide configuration
//!
//! Optional JSON file that renames the page or points materials at other
//! image files. Every field may be omitted:
//!
//! ```json
//! {
//!   "title": "분리배출 가이드",
//!   "materials": {
//!     "glass": { "image": "/images/glass-v2.png" },
//!     "스티로폼": { "icon": "/icons/foam.png" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::MaterialCatalog;
use crate::error::{GuideError, Result};
use crate::material::Material;

pub const DEFAULT_TITLE: &str = "분리배출 가이드";

/// Replacement paths for a single material
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialOverride {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuideConfig {
    /// Window and page title
    #[serde(default = "default_title")]
    pub title: String,
    /// Keyed by slug or Korean label
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialOverride>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            materials: BTreeMap::new(),
        }
    }
}

impl GuideConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GuideConfig = serde_json::from_str(json)?;
        // Surface bad material keys at load time rather than at render.
        config.catalog()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            overrides = config.materials.len(),
            "Loaded guide config"
        );
        Ok(config)
    }

    /// Material catalog with this config's overrides applied.
    ///
    /// Fails on an unknown key or on two keys naming the same material.
    pub fn catalog(&self) -> Result<MaterialCatalog> {
        let mut seen: BTreeMap<Material, &str> = BTreeMap::new();
        let mut overrides = Vec::with_capacity(self.materials.len());
        for (key, ov) in &self.materials {
            let material = key.parse::<Material>()?;
            if let Some(first) = seen.insert(material, key) {
                return Err(GuideError::DuplicateMaterial {
                    first: first.to_string(),
                    second: key.clone(),
                });
            }
            overrides.push((material, ov));
        }
        Ok(MaterialCatalog::from_overrides(overrides))
    }
}
