//! Error type for tile grid construction

use std::fmt;

/// Error type for [`chunkify`](super::chunkify).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// Image has zero width or height
    EmptyImage {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },
    /// The grid has more cells per side than the image has pixels, so at
    /// least one tile dimension would be zero
    DegenerateTile {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
        /// Number of tiles along each axis (`subdivs + 1`)
        cells_per_side: u64,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            TileError::DegenerateTile {
                width,
                height,
                cells_per_side,
            } => {
                write!(
                    f,
                    "{}x{} image cannot be split into {} tiles per side",
                    width, height, cells_per_side
                )
            }
        }
    }
}

impl std::error::Error for TileError {}

/// Error type for parsing an [`EdgePolicy`](super::EdgePolicy) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEdgePolicyError(pub String);

impl fmt::Display for ParseEdgePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown edge policy '{}' (expected 'leave' or 'extend')",
            self.0
        )
    }
}

impl std::error::Error for ParseEdgePolicyError {}
