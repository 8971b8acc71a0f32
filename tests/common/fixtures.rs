//! Test fixtures and constants.

use sepia_tone::{Rgb, RgbBuffer};
use sepiaconv::PipelineOptions;

/// Known sepia outputs for a few inputs
pub mod colors {
    use sepia_tone::Rgb;

    /// Sepia of pure white: blue channel is floor(0.937 * 255)
    pub const SEPIA_WHITE: Rgb = Rgb::new(255, 255, 238);

    pub const MIDTONE: Rgb = Rgb::new(100, 150, 200);
    pub const SEPIA_MIDTONE: Rgb = Rgb::new(192, 171, 133);
}

/// Solid image of one color
pub fn solid(width: u32, height: u32, color: Rgb) -> RgbBuffer {
    RgbBuffer::new(width, height, color)
}

/// Image where every pixel differs, so misplaced tiles show up
pub fn gradient(width: u32, height: u32) -> RgbBuffer {
    RgbBuffer::from_fn(width, height, |x, y| {
        Rgb::new(
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x * 31 + y * 17) % 256) as u8,
        )
    })
}

/// Deterministic pseudo-random noise (xorshift), seeded per test
pub fn noise(width: u32, height: u32, seed: u32) -> RgbBuffer {
    let mut state = seed.max(1);
    RgbBuffer::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let [r, g, b, _] = state.to_le_bytes();
        Rgb::new(r, g, b)
    })
}

/// Pipeline options with the given threads and subdivs, other fields default
pub fn options(threads: usize, subdivs: u32) -> PipelineOptions {
    PipelineOptions {
        threads,
        subdivs,
        ..Default::default()
    }
}

/// Write `buffer` as PNG regardless of the path's extension
pub fn write_png(path: &std::path::Path, buffer: &RgbBuffer) {
    image::RgbImage::from_raw(buffer.width(), buffer.height(), buffer.to_raw())
        .expect("buffer size matches dimensions")
        .save_with_format(path, image::ImageFormat::Png)
        .expect("write PNG fixture");
}

/// Write a 16-bit RGBA farbfeld file, a format `image` reads but cannot
/// write as RGB8
pub fn write_farbfeld(path: &std::path::Path, width: u32, height: u32) {
    let image: image::ImageBuffer<image::Rgba<u16>, Vec<u16>> =
        image::ImageBuffer::from_pixel(width, height, image::Rgba([u16::MAX; 4]));
    image
        .save_with_format(path, image::ImageFormat::Farbfeld)
        .expect("write farbfeld fixture");
}
