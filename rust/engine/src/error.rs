use std::path::PathBuf;

use thiserror::Error;

/// Result type for import operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while importing a PLY file
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("Import cancelled by user")]
    Cancelled,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parser error: {0}")]
    CoreError(#[from] ply_lite_core::Error),
    #[error("Geometry error: {0}")]
    GeometryError(#[from] ply_lite_geometry::Error),
}
