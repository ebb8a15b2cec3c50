// File: crates/foundry-core/src/error.rs
// Summary: Error taxonomy for dataset edits, palette operations and the save/share/export boundaries.

use thiserror::Error;

/// Errors reported at the boundary of each engine operation.
///
/// None of these cross the compose boundary: an unsatisfiable dataset is turned
/// into an empty-state spec instead of an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Dataset is empty or cannot satisfy even a reshaped target.
    #[error("dataset cannot be shaped for {variant}: {reason}")]
    InvalidShape { variant: String, reason: String },

    /// A removal would leave the palette without colors.
    #[error("palette must keep at least one color (has {len})")]
    PaletteUnderflow { len: usize },

    /// A raw dataset edit could not be parsed into records.
    #[error("malformed dataset edit: {reason}")]
    MalformedEdit { reason: String },

    /// The save payload could not be serialized.
    #[error("serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("unknown chart variant '{0}'")]
    UnknownVariant(String),

    #[error("unknown palette '{0}'")]
    UnknownPalette(String),

    #[error("index {index} out of range for palette of {len} colors")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid color value '{0}'")]
    InvalidColor(String),

    #[error("invalid share link: {reason}")]
    InvalidShareLink { reason: String },

    #[error("invalid export request: {reason}")]
    InvalidExport { reason: String },
}

impl ChartError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedEdit { reason: reason.into() }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ChartError>;
