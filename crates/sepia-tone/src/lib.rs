//! sepia-tone: tiling and sepia color transform engine
//!
//! This crate holds the pure, dependency-free parts of the sepia converter:
//! the per-pixel [`ColorTransform`], the [`chunkify`] tiler and the
//! [`RgbBuffer`] that tiles are cropped from and pasted into. Scheduling tiles
//! across threads lives in the `sepiaconv` crate.
//!
//! # Quick Start
//!
//! ```
//! use sepia_tone::{chunkify, ColorTransform, EdgePolicy, Rgb, RgbBuffer, Sepia};
//!
//! let source = RgbBuffer::new(8, 8, Rgb::WHITE);
//! let mut output = RgbBuffer::new(8, 8, Rgb::BLACK);
//!
//! for tile in chunkify(8, 8, 1, EdgePolicy::Leave).unwrap() {
//!     let mut piece = source.crop(&tile).unwrap();
//!     Sepia.apply_batch(piece.pixels_mut());
//!     output.paste(&piece, tile.left, tile.top).unwrap();
//! }
//!
//! assert!(output.pixels().iter().all(|&px| px == Rgb::new(255, 255, 238)));
//! ```
//!
//! # Tiling
//!
//! `subdivs` counts the *extra* cuts per axis: `subdivs = 0` is a single tile,
//! `subdivs = 3` is a 4x4 grid. Tile sizes use floor division. When the image
//! is not divisible by the grid, [`EdgePolicy::Leave`] leaves the right and
//! bottom remainder uncovered and [`EdgePolicy::Extend`] widens the last
//! column and row to reach the edges.
//!
//! # Numeric Contract
//!
//! [`Sepia`] evaluates the channel mix in `f64` and truncates. Batched and
//! per-pixel application give identical bytes, and since each pixel is
//! independent the tile layout never changes the result.

pub mod buffer;
pub mod color;
pub mod tile;


pub use buffer::{BufferError, RgbBuffer};
pub use color::{ColorTransform, ParseColorError, Rgb, Sepia};
pub use tile::{chunkify, uncovered_pixels, EdgePolicy, ParseEdgePolicyError, Tile, TileError};
