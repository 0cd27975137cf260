//! Reusable UI components
//!
//! Class names map onto the stylesheet shipped by the application crate.

mod background;
mod button;
mod card;
mod modal;

pub use background::*;
pub use button::*;
pub use card::*;
pub use modal::*;
