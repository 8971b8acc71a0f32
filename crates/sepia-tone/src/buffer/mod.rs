//! Owned RGB pixel buffers.
//!
//! [`RgbBuffer`] is the in-memory image exchanged between the decoder, the
//! tile workers and the encoder. Tiles are cut out with
//! [`RgbBuffer::crop`] and written back with [`RgbBuffer::paste`].

mod error;
mod rgb_buffer;

pub use error::BufferError;
pub use rgb_buffer::RgbBuffer;
