//! Page components for the recycling guide.

mod guide;
mod landing;

pub use guide::GuidePage;
pub use landing::Landing;
