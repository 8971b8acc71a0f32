//! Tile grid partitioning
//!
//! [`chunkify`] splits an image extent into a `(subdivs+1) x (subdivs+1)` grid
//! of non-overlapping [`Tile`]s in row-major order. Tile sizes use floor
//! division, so when the extent is not divisible by the grid a remainder strip
//! is left along the right and bottom edges. [`EdgePolicy`] decides whether
//! that strip stays uncovered or is folded into the last column and row.

mod error;
mod tiler;

pub use error::{ParseEdgePolicyError, TileError};
pub use tiler::{chunkify, uncovered_pixels, EdgePolicy, Tile};
