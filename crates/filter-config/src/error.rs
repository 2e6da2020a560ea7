use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while loading translator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A depth limit of zero would reject every filter.
    #[error("Invalid max_depth: must be at least 1")]
    InvalidMaxDepth,
}
