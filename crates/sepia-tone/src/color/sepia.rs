//! Sepia color transform
//!
//! The transform is a fixed 3x3 channel mix followed by truncation and an
//! upper clamp at 255:
//!
//! ```text
//! r' = min(floor(0.393 r + 0.769 g + 0.189 b), 255)
//! g' = min(floor(0.349 r + 0.686 g + 0.168 b), 255)
//! b' = min(floor(0.272 r + 0.534 g + 0.131 b), 255)
//! ```
//!
//! All coefficients are non-negative, so no lower clamp is needed. Sums are
//! evaluated left to right in `f64` and truncated toward zero. Rounding
//! (of any flavor) would change results on boundary inputs.

use super::rgb::Rgb;

/// Channel mix coefficients, one row per output channel (R, G, B).
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Pixels per block in [`Sepia::apply_batch`].
const LANES: usize = 8;

/// A per-pixel color transform applied by tile workers.
///
/// Implementations must be pure: the same input always yields the same
/// output, and calls from several threads at once need no coordination.
/// [`apply_batch`](ColorTransform::apply_batch) must produce exactly the
/// values that [`apply`](ColorTransform::apply) would for every pixel.
pub trait ColorTransform: Send + Sync {
    /// Transform a single pixel.
    fn apply(&self, pixel: Rgb) -> Rgb;

    /// Transform a slice of pixels in place.
    fn apply_batch(&self, pixels: &mut [Rgb]) {
        for pixel in pixels {
            *pixel = self.apply(*pixel);
        }
    }
}

/// The classic sepia tone transform.
///
/// # Example
///
/// ```
/// use sepia_tone::{ColorTransform, Rgb, Sepia};
///
/// // Red and green saturate, blue does not
/// assert_eq!(Sepia.apply(Rgb::WHITE), Rgb::new(255, 255, 238));
/// assert_eq!(Sepia.apply(Rgb::BLACK), Rgb::BLACK);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sepia;

impl ColorTransform for Sepia {
    #[inline]
    fn apply(&self, pixel: Rgb) -> Rgb {
        let (r, g, b) = (pixel.r as f64, pixel.g as f64, pixel.b as f64);
        Rgb::new(
            mix(&SEPIA_MATRIX[0], r, g, b),
            mix(&SEPIA_MATRIX[1], r, g, b),
            mix(&SEPIA_MATRIX[2], r, g, b),
        )
    }

    /// Blocked variant: channels of [`LANES`] pixels are split into separate
    /// arrays so the mixing loop is straight-line arithmetic. Each pixel still
    /// goes through the same expression as [`Sepia::apply`].
    fn apply_batch(&self, pixels: &mut [Rgb]) {
        let mut blocks = pixels.chunks_exact_mut(LANES);

        for block in &mut blocks {
            let mut r = [0.0f64; LANES];
            let mut g = [0.0f64; LANES];
            let mut b = [0.0f64; LANES];
            for (i, px) in block.iter().enumerate() {
                r[i] = px.r as f64;
                g[i] = px.g as f64;
                b[i] = px.b as f64;
            }

            let red = mix_lanes(&SEPIA_MATRIX[0], &r, &g, &b);
            let green = mix_lanes(&SEPIA_MATRIX[1], &r, &g, &b);
            let blue = mix_lanes(&SEPIA_MATRIX[2], &r, &g, &b);

            for (i, px) in block.iter_mut().enumerate() {
                *px = Rgb::new(red[i], green[i], blue[i]);
            }
        }

        for px in blocks.into_remainder() {
            *px = self.apply(*px);
        }
    }
}

#[inline]
fn mix(coeffs: &[f64; 3], r: f64, g: f64, b: f64) -> u8 {
    truncate(coeffs[0] * r + coeffs[1] * g + coeffs[2] * b)
}

#[inline]
fn mix_lanes(
    coeffs: &[f64; 3],
    r: &[f64; LANES],
    g: &[f64; LANES],
    b: &[f64; LANES],
) -> [u8; LANES] {
    let mut out = [0u8; LANES];
    for i in 0..LANES {
        out[i] = truncate(coeffs[0] * r[i] + coeffs[1] * g[i] + coeffs[2] * b[i]);
    }
    out
}

/// Clamp to 255 then drop the fractional part. `as u8` truncates toward zero.
#[inline]
fn truncate(value: f64) -> u8 {
    value.min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Formula evaluated independently of the production helpers.
    fn reference(r: u8, g: u8, b: u8) -> Rgb {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        let red = (0.393 * r + 0.769 * g + 0.189 * b).floor().min(255.0);
        let green = (0.349 * r + 0.686 * g + 0.168 * b).floor().min(255.0);
        let blue = (0.272 * r + 0.534 * g + 0.131 * b).floor().min(255.0);
        Rgb::new(red as u8, green as u8, blue as u8)
    }

    #[test]
    fn test_white_saturates_red_and_green() {
        assert_eq!(Sepia.apply(Rgb::WHITE), Rgb::new(255, 255, 238));
    }

    #[test]
    fn test_black_stays_black() {
        assert_eq!(Sepia.apply(Rgb::BLACK), Rgb::BLACK);
    }

    #[test]
    fn test_known_values() {
        // 192.45, 171.4, 133.5 -> truncated
        assert_eq!(Sepia.apply(Rgb::new(100, 150, 200)), Rgb::new(192, 171, 133));
        // Pure channels
        assert_eq!(Sepia.apply(Rgb::new(255, 0, 0)), Rgb::new(100, 88, 69));
        assert_eq!(Sepia.apply(Rgb::new(0, 255, 0)), Rgb::new(196, 174, 136));
        assert_eq!(Sepia.apply(Rgb::new(0, 0, 255)), Rgb::new(48, 42, 33));
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 0.393 + 0.769 + 0.189 = 1.351 -> 1, rounding would give 1 as well;
        // at 2 the red sum is 2.702, which rounds to 3 but must truncate to 2.
        assert_eq!(Sepia.apply(Rgb::new(2, 2, 2)).r, 2);
        // Blue at grey 3: 0.937 * 3 = 2.811 -> 2
        assert_eq!(Sepia.apply(Rgb::new(3, 3, 3)).b, 2);
    }

    #[test]
    fn test_matches_reference_formula() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(7) {
                for b in (0..=255u8).step_by(3) {
                    assert_eq!(
                        Sepia.apply(Rgb::new(r, g, b)),
                        reference(r, g, b),
                        "mismatch at ({r}, {g}, {b})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_blue_never_saturates() {
        for v in 0..=255u8 {
            assert!(Sepia.apply(Rgb::new(v, v, v)).b <= 238);
        }
    }

    #[test]
    fn test_batch_matches_scalar() {
        // 37 pixels: four full blocks plus a remainder of 5
        let mut pixels: Vec<Rgb> = (0..37u32)
            .map(|i| Rgb::new((i * 7) as u8, (i * 13 + 40) as u8, (255 - i * 5) as u8))
            .collect();
        let expected: Vec<Rgb> = pixels.iter().map(|&px| Sepia.apply(px)).collect();

        Sepia.apply_batch(&mut pixels);

        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_default_batch_uses_apply() {
        struct Invert;
        impl ColorTransform for Invert {
            fn apply(&self, px: Rgb) -> Rgb {
                Rgb::new(255 - px.r, 255 - px.g, 255 - px.b)
            }
        }

        let mut pixels = vec![Rgb::BLACK, Rgb::new(10, 20, 30)];
        Invert.apply_batch(&mut pixels);
        assert_eq!(pixels, vec![Rgb::WHITE, Rgb::new(245, 235, 225)]);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut pixels: Vec<Rgb> = Vec::new();
        Sepia.apply_batch(&mut pixels);
        assert!(pixels.is_empty());
    }
}
