//! Row-major RGB buffer with rectangular crop and paste.

use super::error::BufferError;
use crate::color::Rgb;
use crate::tile::Tile;

/// An owned image of `width * height` [`Rgb`] pixels in row-major order.
///
/// # Example
///
/// ```
/// use sepia_tone::{Rgb, RgbBuffer, Tile};
///
/// let source = RgbBuffer::from_fn(4, 4, |x, y| Rgb::new(x as u8, y as u8, 0));
/// let corner = source.crop(&Tile::new(2, 2, 2, 2)).unwrap();
///
/// let mut canvas = RgbBuffer::new(4, 4, Rgb::BLACK);
/// canvas.paste(&corner, 2, 2).unwrap();
///
/// assert_eq!(canvas.get(3, 3), Some(Rgb::new(3, 3, 0)));
/// assert_eq!(canvas.get(0, 0), Some(Rgb::BLACK));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RgbBuffer {
    /// Create a buffer filled with a single color.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Create a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap existing pixels.
    ///
    /// # Errors
    ///
    /// [`BufferError::SizeMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, BufferError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BufferError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from interleaved `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::SizeMismatch`] if `bytes.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, bytes: &[u8]) -> Result<Self, BufferError> {
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(BufferError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Interleaved `[R, G, B, ...]` bytes, `width * height * 3` long.
    pub fn to_raw(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            raw.extend_from_slice(&px.to_bytes());
        }
        raw
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the pixels as a slice, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Returns the pixels as a mutable slice, row-major.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Copy the pixels under `tile` into a new buffer of the tile's size.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if the tile reaches outside this buffer.
    pub fn crop(&self, tile: &Tile) -> Result<RgbBuffer, BufferError> {
        self.check_region(tile.left, tile.top, tile.width, tile.height)?;

        let row_len = tile.width as usize;
        let mut pixels = Vec::with_capacity(row_len * tile.height as usize);
        for y in tile.top..tile.bottom() {
            let start = self.index(tile.left, y);
            pixels.extend_from_slice(&self.pixels[start..start + row_len]);
        }

        Ok(RgbBuffer {
            width: tile.width,
            height: tile.height,
            pixels,
        })
    }

    /// Copy all of `src` into this buffer with its top-left corner at
    /// `(left, top)`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `src` does not fit at that position.
    /// Nothing is written in that case.
    pub fn paste(&mut self, src: &RgbBuffer, left: u32, top: u32) -> Result<(), BufferError> {
        self.check_region(left, top, src.width, src.height)?;

        let row_len = src.width as usize;
        for (row, src_row) in src.pixels.chunks_exact(row_len.max(1)).enumerate() {
            let start = self.index(left, top + row as u32);
            self.pixels[start..start + row_len].copy_from_slice(src_row);
        }

        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn check_region(&self, left: u32, top: u32, width: u32, height: u32) -> Result<(), BufferError> {
        let fits_x = left as u64 + width as u64 <= self.width as u64;
        let fits_y = top as u64 + height as u64 <= self.height as u64;
        if fits_x && fits_y {
            Ok(())
        } else {
            Err(BufferError::OutOfBounds {
                left,
                top,
                width,
                height,
                buffer_width: self.width,
                buffer_height: self.height,
            })
        }
    }
}
