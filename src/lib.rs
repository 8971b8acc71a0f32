//! sepiaconv - tile-parallel sepia toning
//!
//! Loads an image, splits it into tiles, tones the tiles on a pool of worker
//! threads and writes the reassembled result.
//! This library exposes modules for integration testing.

pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;

pub use error::ConvertError;
pub use models::ConvertConfig;
pub use pipeline::{Conversion, Pipeline, PipelineOptions, RunStats};
