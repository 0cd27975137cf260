//! UI Components for the recycling guide page.

mod control_cluster;
mod fallback_image;
mod guide_image;
mod material_grid;
mod material_modal;
mod reveal;

pub use control_cluster::ControlCluster;
pub use fallback_image::FallbackImage;
pub use guide_image::GuideImageSection;
pub use material_grid::MaterialGrid;
pub use material_modal::MaterialModal;
pub use reveal::Reveal;
