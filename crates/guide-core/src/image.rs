//! Image fallback
//!
//! A missing guide image or material illustration must never break the page.
//! [`ImageSource`] swaps in a placeholder on the first load error and then
//! stays put, so a broken placeholder cannot trigger another substitution.

use std::path::Path;

use crate::assets::AssetManifest;

/// Placeholder shown when an image fails to load
pub const DEFAULT_IMAGE: &str = "/images/default.png";

/// Source path of a rendered image, with one-shot fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    requested: String,
    current: String,
    fallen_back: bool,
}

impl ImageSource {
    pub fn new(path: impl Into<String>) -> Self {
        let requested = path.into();
        Self {
            current: requested.clone(),
            requested,
            fallen_back: false,
        }
    }

    /// Path originally asked for
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Asset path currently in use
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn has_fallen_back(&self) -> bool {
        self.fallen_back
    }

    /// Handle a load error for the current source.
    ///
    /// Returns `true` when the source was switched to [`DEFAULT_IMAGE`].
    pub fn on_error(&mut self) -> bool {
        if self.fallen_back {
            tracing::debug!(path = %self.current, "Placeholder failed to load, not retrying");
            return false;
        }
        tracing::error!(path = %self.requested, "Image failed to load, using placeholder");
        self.current = DEFAULT_IMAGE.to_string();
        self.fallen_back = true;
        true
    }

    /// Read the current source from `root` as a data URI.
    ///
    /// An unreadable file counts as a load error: the placeholder is tried
    /// once, and `None` means neither could be read.
    pub fn load(&mut self, root: &Path) -> Option<String> {
        match AssetManifest::data_uri(root, &self.current) {
            Ok(uri) => Some(uri),
            Err(e) => {
                tracing::debug!(path = %self.current, "Could not read image: {}", e);
                if self.on_error() {
                    self.load(root)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_requested_path() {
        let src = ImageSource::new("/Guide/1.png");
        assert_eq!(src.current(), "/Guide/1.png");
        assert!(!src.has_fallen_back());
    }

    #[test]
    fn error_switches_to_default_once() {
        let mut src = ImageSource::new("/images/plastic.png");
        assert!(src.on_error());
        assert_eq!(src.current(), DEFAULT_IMAGE);
        assert_eq!(src.requested(), "/images/plastic.png");

        assert!(!src.on_error());
        assert!(!src.on_error());
        assert_eq!(src.current(), DEFAULT_IMAGE);
    }

    fn write_asset(root: &Path, path: &str) {
        let file = AssetManifest::resolve(root, path);
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(file, b"png").unwrap();
    }

    #[test]
    fn load_reads_requested_file() {
        let dir = tempfile::TempDir::new().unwrap();
        write_asset(dir.path(), "/Guide/1.png");

        let mut src = ImageSource::new("/Guide/1.png");
        let uri = src.load(dir.path()).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(!src.has_fallen_back());
    }

    #[test]
    fn load_missing_file_uses_placeholder() {
        let dir = tempfile::TempDir::new().unwrap();
        write_asset(dir.path(), DEFAULT_IMAGE);

        let mut src = ImageSource::new("/images/plastic.png");
        assert!(src.load(dir.path()).is_some());
        assert_eq!(src.current(), DEFAULT_IMAGE);
        assert!(src.has_fallen_back());
    }

    #[test]
    fn load_without_placeholder_gives_up_once() {
        let dir = tempfile::TempDir::new().unwrap();

        let mut src = ImageSource::new("/images/plastic.png");
        assert_eq!(src.load(dir.path()), None);
        assert_eq!(src.load(dir.path()), None);
        assert_eq!(src.current(), DEFAULT_IMAGE);
    }
}
