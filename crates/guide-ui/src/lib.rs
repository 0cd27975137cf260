//! Recycling Guide UI Primitives
//!
//! Presentational Dioxus components the guide page is composed from. None
//! of them hold application state; they take style variants and callbacks.
//!
//! - **Button / CloseButton**: styled actions
//! - **Card**: raised panel for a grid entry
//! - **Modal**: dismissable overlay dialog
//! - **BackgroundAnimation**: drifting ambient shapes behind the page

pub mod components;

pub use components::*;
