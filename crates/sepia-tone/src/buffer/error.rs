//! Error type for buffer construction and region copies

use std::fmt;

/// Error type for [`RgbBuffer`](super::RgbBuffer) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Pixel data length does not match `width * height`
    SizeMismatch {
        /// Expected number of elements
        expected: usize,
        /// Number of elements provided
        actual: usize,
    },
    /// A region reaches outside the buffer
    OutOfBounds {
        /// Left edge of the region
        left: u32,
        /// Top edge of the region
        top: u32,
        /// Region width
        width: u32,
        /// Region height
        height: u32,
        /// Buffer width
        buffer_width: u32,
        /// Buffer height
        buffer_height: u32,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel data length mismatch: expected {}, got {}",
                    expected, actual
                )
            }
            BufferError::OutOfBounds {
                left,
                top,
                width,
                height,
                buffer_width,
                buffer_height,
            } => {
                write!(
                    f,
                    "region {}x{} at ({}, {}) exceeds {}x{} buffer",
                    width, height, left, top, buffer_width, buffer_height
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}
