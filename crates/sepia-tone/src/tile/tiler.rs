//! Tile rectangles and grid construction.

use std::fmt;
use std::str::FromStr;

use super::error::{ParseEdgePolicyError, TileError};

/// A rectangular region of an image, in pixel coordinates.
///
/// `left`/`top` is both the crop origin in the source image and the paste
/// destination in the output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// X coordinate of the left edge
    pub left: u32,
    /// Y coordinate of the top edge
    pub top: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Tile {
    /// Create a new tile rectangle.
    #[inline]
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// X coordinate one past the right edge.
    #[inline]
    pub const fn right(&self) -> u32 {
        self.left + self.width
    }

    /// Y coordinate one past the bottom edge.
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// Top-left corner as `(x, y)`.
    #[inline]
    pub const fn offset(&self) -> (u32, u32) {
        (self.left, self.top)
    }

    /// Number of pixels covered.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the pixel at `(x, y)` lies inside this tile.
    #[inline]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    /// Whether two tiles share at least one pixel.
    pub fn intersects(&self, other: &Tile) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// How to treat the strip of pixels left over when the image extent is not
/// divisible by the number of tiles per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// No tile covers the remainder; it keeps the output background.
    #[default]
    Leave,
    /// The last column grows to the right edge and the last row grows to the
    /// bottom edge, so the grid covers every pixel.
    Extend,
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgePolicy::Leave => write!(f, "leave"),
            EdgePolicy::Extend => write!(f, "extend"),
        }
    }
}

impl FromStr for EdgePolicy {
    type Err = ParseEdgePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("leave") => Ok(EdgePolicy::Leave),
            v if v.eq_ignore_ascii_case("extend") => Ok(EdgePolicy::Extend),
            other => Err(ParseEdgePolicyError(other.to_string())),
        }
    }
}

/// Partition a `width x height` extent into `(subdivs+1)^2` tiles.
///
/// `subdivs` is the number of additional divisions per axis. Tile `i` sits at
/// column `i % (subdivs+1)` and row `i / (subdivs+1)`; the base tile size is
/// `floor(width / (subdivs+1)) x floor(height / (subdivs+1))`.
///
/// # Errors
///
/// - [`TileError::EmptyImage`] if either dimension is zero.
/// - [`TileError::DegenerateTile`] if `subdivs+1` exceeds either dimension,
///   which would produce zero-area tiles.
///
/// # Example
///
/// ```
/// use sepia_tone::{chunkify, EdgePolicy, Tile};
///
/// let tiles = chunkify(8, 8, 1, EdgePolicy::Leave).unwrap();
/// assert_eq!(tiles.len(), 4);
/// assert_eq!(tiles[3], Tile::new(4, 4, 4, 4));
/// ```
pub fn chunkify(
    width: u32,
    height: u32,
    subdivs: u32,
    policy: EdgePolicy,
) -> Result<Vec<Tile>, TileError> {
    if width == 0 || height == 0 {
        return Err(TileError::EmptyImage { width, height });
    }

    let cells = subdivs as u64 + 1;
    if cells > width as u64 || cells > height as u64 {
        return Err(TileError::DegenerateTile {
            width,
            height,
            cells_per_side: cells,
        });
    }

    // cells <= min(width, height), so it fits in u32
    let cells = cells as u32;
    let tile_width = width / cells;
    let tile_height = height / cells;

    let mut tiles = Vec::with_capacity(cells as usize * cells as usize);
    for row in 0..cells {
        for col in 0..cells {
            let left = col * tile_width;
            let top = row * tile_height;

            let (w, h) = match policy {
                EdgePolicy::Leave => (tile_width, tile_height),
                EdgePolicy::Extend => {
                    let w = if col + 1 == cells { width - left } else { tile_width };
                    let h = if row + 1 == cells { height - top } else { tile_height };
                    (w, h)
                }
            };

            tiles.push(Tile::new(left, top, w, h));
        }
    }

    Ok(tiles)
}

/// Number of pixels that [`EdgePolicy::Leave`] leaves without a tile.
///
/// Returns the full pixel count when the grid would be degenerate.
pub fn uncovered_pixels(width: u32, height: u32, subdivs: u32) -> u64 {
    let total = width as u64 * height as u64;
    let cells = subdivs as u64 + 1;
    if cells > width as u64 || cells > height as u64 {
        return total;
    }

    let covered_w = (width as u64 / cells) * cells;
    let covered_h = (height as u64 / cells) * cells;
    total - covered_w * covered_h
}
