use std::path::PathBuf;

use sepia_tone::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Could not load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not save image {}: {source}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "Cannot write {}: extension must name a format that stores 8-bit RGB (e.g. .jpg, .png)",
        path.display()
    )]
    UnsupportedOutputFormat { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Could not read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Worker {worker} panicked")]
    WorkerFailed { worker: usize },

    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
}
