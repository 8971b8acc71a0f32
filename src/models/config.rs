use serde::Deserialize;
use std::path::Path;

use sepia_tone::{EdgePolicy, Rgb};

use crate::error::ConvertError;
use crate::pipeline::PipelineOptions;

/// Conversion settings, optionally loaded from a YAML file.
///
/// Every field has a default, so an empty file (or no file) yields the
/// built-in configuration. Command-line flags override individual fields.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Number of worker threads
    #[serde(default = "default_threads")]
    pub threads: usize,

    /// Additional tile divisions per axis (grid is `subdivs+1` per side)
    #[serde(default = "default_subdivs")]
    pub subdivs: u32,

    /// Output background as a hex color, visible wherever no tile is pasted
    #[serde(default = "default_background")]
    pub background: String,

    /// Remainder strip handling: "leave" or "extend"
    #[serde(default = "default_edges")]
    pub edges: String,
}

fn default_threads() -> usize {
    4
}

fn default_subdivs() -> u32 {
    3
}

fn default_background() -> String {
    "#000000".to_string()
}

fn default_edges() -> String {
    "leave".to_string()
}

impl ConvertConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConvertError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConvertError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            threads = config.threads,
            subdivs = config.subdivs,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Check the settings and turn them into pipeline options.
    ///
    /// Everything that can be judged without the image is checked here, so
    /// a bad value fails before any file is read. Tile geometry depends on
    /// the image size and is left to the pipeline.
    pub fn resolve(&self) -> Result<PipelineOptions, ConvertError> {
        if self.threads == 0 {
            return Err(ConvertError::InvalidConfiguration(
                "thread count must be at least 1".to_string(),
            ));
        }
        let background: Rgb = self
            .background
            .parse::<Rgb>()
            .map_err(|e| ConvertError::InvalidConfiguration(e.to_string()))?;
        let edges: EdgePolicy = self
            .edges
            .parse::<EdgePolicy>()
            .map_err(|e| ConvertError::InvalidConfiguration(e.to_string()))?;

        Ok(PipelineOptions {
            threads: self.threads,
            subdivs: self.subdivs,
            background,
            edges,
        })
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            subdivs: default_subdivs(),
            background: default_background(),
            edges: default_edges(),
        }
    }
}
