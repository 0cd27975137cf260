//! Error types for the recycling guide

use thiserror::Error;

/// Main error type for guide operations
#[derive(Error, Debug)]
pub enum GuideError {
    /// A material name that is not one of the six catalog categories
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Two config keys name the same material, e.g. `glass` and `유리`
    #[error("Material configured twice: {first} and {second}")]
    DuplicateMaterial { first: String, second: String },

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for guide operations
pub type Result<T> = std::result::Result<T, GuideError>;
