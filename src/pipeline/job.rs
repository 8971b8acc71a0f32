//! Work items handed from the orchestrator to workers.

use sepia_tone::{RgbBuffer, Tile};

/// One unit of work: a copy of a tile's source pixels plus where the toned
/// result goes in the output.
#[derive(Debug, Clone)]
pub struct Job {
    pub tile: Tile,
    pub pixels: RgbBuffer,
}

impl Job {
    /// Copy `tile`'s pixels out of `source`.
    pub fn from_source(source: &RgbBuffer, tile: Tile) -> Result<Self, sepia_tone::BufferError> {
        Ok(Self {
            tile,
            pixels: source.crop(&tile)?,
        })
    }

    /// Destination offset `(x, y)` in the output buffer.
    pub fn offset(&self) -> (u32, u32) {
        self.tile.offset()
    }
}
