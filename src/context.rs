//! Settings context for the recycling guide.
//!
//! The catalog, page title and asset root are fixed for the lifetime of the
//! window and provided once from the root component.
//!
//! ## Usage
//!
//! ```ignore
//! let settings = use_settings();
//! for entry in settings.catalog.iter() { /* ... */ }
//! ```

use std::path::PathBuf;
use std::rc::Rc;

use dioxus::prelude::*;
use guide_core::MaterialCatalog;

/// Read-only settings shared by every page.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideSettings {
    pub title: String,
    pub catalog: Rc<MaterialCatalog>,
    /// Directory image paths are resolved against
    pub asset_root: Rc<PathBuf>,
}

impl GuideSettings {
    /// Build from the config loaded in `main`.
    pub fn from_startup() -> Self {
        let config = crate::get_settings();
        let catalog = config.catalog().unwrap_or_else(|e| {
            tracing::error!("Invalid material overrides: {}, using defaults", e);
            MaterialCatalog::default()
        });
        Self {
            title: config.title,
            catalog: Rc::new(catalog),
            asset_root: Rc::new(crate::get_asset_root()),
        }
    }
}

/// Hook to access the guide settings from context.
pub fn use_settings() -> GuideSettings {
    use_context::<GuideSettings>()
}
