//! Pixel type and color transforms
//!
//! This module provides the 8-bit [`Rgb`] pixel used throughout the crate and
//! the [`ColorTransform`] contract that workers apply to tiles.
//!
//! # Example
//!
//! ```
//! use sepia_tone::{ColorTransform, Rgb, Sepia};
//!
//! let toned = Sepia.apply(Rgb::new(100, 150, 200));
//! assert_eq!(toned, Rgb::new(192, 171, 133));
//! ```

mod error;
mod rgb;
mod sepia;

pub use error::ParseColorError;
pub use rgb::Rgb;
pub use sepia::{ColorTransform, Sepia, SEPIA_MATRIX};
