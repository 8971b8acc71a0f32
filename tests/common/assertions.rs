//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use sepia_tone::{ColorTransform, Rgb, RgbBuffer, Sepia};

/// Assert every pixel of `image` equals `expected`
pub fn assert_all_pixels(image: &RgbBuffer, expected: Rgb) {
    if let Some(pos) = image.pixels().iter().position(|&px| px != expected) {
        let width = image.width() as usize;
        panic!(
            "Pixel ({}, {}) is {}, expected {}",
            pos % width,
            pos / width,
            image.pixels()[pos],
            expected
        );
    }
}

/// Assert two images are pixel-identical
pub fn assert_same_image(actual: &RgbBuffer, expected: &RgbBuffer) {
    assert_eq!(
        actual.dimensions(),
        expected.dimensions(),
        "Image dimensions differ"
    );
    if let Some(pos) = actual
        .pixels()
        .iter()
        .zip(expected.pixels())
        .position(|(a, b)| a != b)
    {
        let width = actual.width() as usize;
        panic!(
            "First difference at ({}, {}): got {}, expected {}",
            pos % width,
            pos / width,
            actual.pixels()[pos],
            expected.pixels()[pos]
        );
    }
}

/// Sepia applied pixel by pixel on one thread, the reference every run must match
pub fn sequential_sepia(source: &RgbBuffer) -> RgbBuffer {
    let mut expected = source.clone();
    for px in expected.pixels_mut() {
        *px = Sepia.apply(*px);
    }
    expected
}
