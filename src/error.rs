//! Error types for webp-convert.

use std::path::PathBuf;

/// Errors produced while converting a single image or validating how the
/// conversion was requested.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Invalid or conflicting configuration (flags or config file).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The input path does not end in `.webp`.
    #[error("input file is not a webp file type: {}", .0.display())]
    InvalidInputFormat(PathBuf),

    /// Opening the input or creating the output failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input could not be decoded as WebP.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Encoding or writing the output failed. The partial file is left on disk.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ConversionError {
    /// Create a new Configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Errors produced by the directory watch loop.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// Creating the watcher or registering the directory failed.
    #[error("failed to watch {}: {source}", path.display())]
    Setup {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    /// The watch path is missing or not a directory.
    #[error("watch path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A watch-triggered conversion failed under the exit-on-error policy.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
