//! Error types for the sketchpad.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for sketchpad operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Grid must have at least one row and one column.
    #[error("invalid grid dimensions: {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    /// Border eats the whole container, or the container has no size.
    #[error("invalid sketchpad geometry: container {container_size}px, border {border_width}px")]
    InvalidGeometry {
        container_size: f32,
        border_width: f32,
    },

    /// Input bounds for rows/columns are empty, start at zero, or exceed the size limit.
    #[error("invalid dimension bounds: {min}..={max}")]
    InvalidBounds { min: usize, max: usize },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
