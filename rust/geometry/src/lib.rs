//! PLY-Lite Geometry Decoding
//!
//! Turns parsed PLY headers and body lines into vertex positions, resolved
//! faces and a polygon `Mesh`, using nalgebra for the coordinate types.

pub mod error;
pub mod faces;
pub mod mesh;
pub mod vertices;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use error::{Error, Result};
pub use faces::{decode_faces, FACE_ELEMENT};
pub use mesh::Mesh;
pub use vertices::{decode_vertices, VERTEX_ELEMENT};
