//! Error types for ridgeline

use std::path::PathBuf;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid or missing user configuration, reported before any processing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `--input` or `--rows` absent (a row count of zero counts as absent)
    #[error("Input file and number of rows are required.")]
    MissingRequired,

    /// Numeric flag value failed to parse
    #[error("Not a number.")]
    NotANumber(String),

    /// Canvas height `rows * spacing + maxHeight` does not fit in 32 bits
    #[error("Max height {max_height} is too large for a {rows}-row canvas")]
    CanvasTooLarge { max_height: u32, rows: usize },

    /// Decimation needs a rate of at least one
    #[error("Sample rate must be at least 1")]
    ZeroSampleRate,
}

/// Failure to read image metadata or pixel rows
#[derive(Debug, thiserror::Error)]
pub enum ImageAccessError {
    /// Dimensions could not be read
    #[error("Error reading image metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Pixel data could not be decoded
    #[error("Error decoding image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Requested row lies outside the image
    #[error("Row {row} is out of bounds for image height {height}")]
    RowOutOfBounds { row: u32, height: u32 },
}

/// ridgeline error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ImageAccess(#[from] ImageAccessError),

    /// Output document could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
