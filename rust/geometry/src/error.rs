use thiserror::Error;

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding PLY geometry
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Missing property {property} on element {element}")]
    MissingProperty { element: String, property: String },

    #[error("Vertex index {index} out of range for {limit} vertices")]
    IndexOutOfRange { index: i64, limit: usize },

    #[error("Core parser error: {0}")]
    CoreError(#[from] ply_lite_core::Error),
}
