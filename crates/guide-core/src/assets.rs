//! Static asset manifest
//!
//! Lists every file the guide page references so a missing asset can be
//! reported once at startup instead of surfacing as a string of load errors,
//! and turns asset files into `data:` URIs the webview can display directly.

use std::path::{Path, PathBuf};

use base64::Engine;

use crate::catalog::MaterialCatalog;
use crate::error::Result;
use crate::image::DEFAULT_IMAGE;
use crate::reveal::GuideImage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    paths: Vec<String>,
}

impl AssetManifest {
    /// Guide images, then per-material image and icon, then the placeholder.
    pub fn for_catalog(catalog: &MaterialCatalog) -> Self {
        let mut paths: Vec<String> = Vec::new();
        let candidates = GuideImage::sequence()
            .into_iter()
            .map(|g| g.src)
            .chain(catalog.iter().flat_map(|e| [e.image.clone(), e.icon.clone()]))
            .chain(std::iter::once(DEFAULT_IMAGE.to_string()));
        for path in candidates {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        Self { paths }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Resolve a site-absolute asset path against the asset root directory.
    pub fn resolve(root: &Path, path: &str) -> PathBuf {
        root.join(path.trim_start_matches('/'))
    }

    /// MIME type for an asset path, from its extension
    pub fn mime_type(path: &str) -> &'static str {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("webp") => "image/webp",
            Some("gif") => "image/gif",
            Some("svg") => "image/svg+xml",
            _ => "image/png",
        }
    }

    /// Read the asset at `path` under `root` as a base64 data URI.
    pub fn data_uri(root: &Path, path: &str) -> Result<String> {
        let bytes = std::fs::read(Self::resolve(root, path))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        Ok(format!("data:{};base64,{}", Self::mime_type(path), encoded))
    }

    /// Manifest paths with no file under `root`.
    pub fn missing(&self, root: &Path) -> Vec<&str> {
        self.paths
            .iter()
            .filter(|p| !Self::resolve(root, p).is_file())
            .map(String::as_str)
            .collect()
    }

    /// Log a warning per missing asset; returns how many were missing.
    pub fn report_missing(&self, root: &Path) -> usize {
        let missing = self.missing(root);
        for path in &missing {
            tracing::warn!(root = %root.display(), path, "Guide asset not found, placeholder will be used");
        }
        if missing.is_empty() {
            tracing::info!(count = self.paths.len(), "All guide assets present");
        }
        missing.len()
    }
}
