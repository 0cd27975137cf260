//! Recycling Guide Core Library
//!
//! Domain logic behind the waste-separation guide page.
//!
//! ## Overview
//!
//! The guide page shows four illustrated guide images that slide into view
//! as the user scrolls, followed by a grid of material cards. Picking a card
//! opens a modal with the disposal instructions for that material.
//!
//! This crate holds everything that is not rendering:
//!
//! - **Catalog**: the fixed material → image/icon table
//! - **Selection**: the closed/open modal state machine
//! - **Reveal**: entrance offsets and stagger timing for the guide images
//! - **Image fallback**: one-shot substitution of a placeholder image
//! - **Assets**: startup verification of the static asset tree
//!
//! ## Quick Start
//!
//! ```
//! use guide_core::{Material, MaterialCatalog, Selection};
//!
//! let catalog = MaterialCatalog::default();
//! let mut selection = Selection::default();
//!
//! selection.open_modal(Material::Glass);
//! assert_eq!(catalog.image(Material::Glass), "/images/glass.png");
//! assert_eq!(selection.modal_title().as_deref(), Some("유리 분리배출 가이드"));
//!
//! selection.close_modal();
//! assert!(!selection.is_open());
//! ```

pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod image;
pub mod material;
pub mod reveal;
pub mod scroll;
pub mod selection;

pub use assets::AssetManifest;
pub use catalog::{MaterialCatalog, MaterialEntry};
pub use config::{GuideConfig, MaterialOverride};
pub use error::{GuideError, Result};
pub use image::{ImageSource, DEFAULT_IMAGE};
pub use material::Material;
pub use reveal::{Axis, EntranceOffset, GuideImage, RevealPolicy, GUIDE_IMAGE_COUNT};
pub use scroll::ScrollRequest;
pub use selection::Selection;
