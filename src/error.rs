//! Error types for banner rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Rendering error type.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The configuration lists no banners.
    #[error("No banners configured; add a `banners` list to the config file")]
    NoBanners,

    /// The rendered output could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
