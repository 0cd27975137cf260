//! Material catalog
//!
//! Fixed lookup from [`Material`] to the two images the page shows for it:
//! the large disposal illustration in the modal and the small card icon.

use crate::config::MaterialOverride;
use crate::material::Material;

/// Image paths for one material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialEntry {
    pub material: Material,
    /// Large illustration shown in the modal
    pub image: String,
    /// Small icon shown on the card
    pub icon: String,
}

/// Immutable material → image table, iterated in [`Material::ALL`] order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialCatalog {
    entries: Vec<MaterialEntry>,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        let entries = Material::ALL
            .into_iter()
            .map(|material| MaterialEntry {
                material,
                image: default_image(material).to_string(),
                icon: format!("/icons/{}.png", material.slug()),
            })
            .collect();
        Self { entries }
    }
}

/// The deployed illustration for styrofoam is published as `styroform.png`.
fn default_image(material: Material) -> &'static str {
    match material {
        Material::Glass => "/images/glass.png",
        Material::Plastic => "/images/plastic.png",
        Material::Paper => "/images/paper.png",
        Material::Vinyl => "/images/vinyl.png",
        Material::Metal => "/images/metal.png",
        Material::Styrofoam => "/images/styroform.png",
    }
}

impl MaterialCatalog {
    /// Build a catalog from the defaults with per-material overrides applied.
    pub fn from_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (Material, &'a MaterialOverride)>,
    {
        let mut catalog = Self::default();
        for (material, ov) in overrides {
            let entry = &mut catalog.entries[material.index()];
            if let Some(ref image) = ov.image {
                entry.image = image.clone();
            }
            if let Some(ref icon) = ov.icon {
                entry.icon = icon.clone();
            }
        }
        catalog
    }

    pub fn entry(&self, material: Material) -> &MaterialEntry {
        &self.entries[material.index()]
    }

    pub fn image(&self, material: Material) -> &str {
        &self.entry(material).image
    }

    pub fn icon(&self, material: Material) -> &str {
        &self.entry(material).icon
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
