//! Color constants for the guide's light, leafy palette.
//!
//! Mirrored by the custom properties at the top of the stylesheet.

#![allow(dead_code)]

// === GREEN (Actions, recycling accents) ===
pub const LEAF: &str = "#16a34a";
pub const LEAF_DARK: &str = "#15803d";

// === SURFACES ===
pub const PAPER: &str = "#ffffff";
pub const STONE: &str = "#6b7280";
pub const OVERLAY: &str = "rgba(0, 0, 0, 0.5)";

// === TEXT ===
pub const INK: &str = "#111827";
pub const INK_MUTED: &str = "#4b5563";
