// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::Point3;

/// Polygon mesh assembled from decoded PLY data.
///
/// Faces embed resolved coordinate tuples rather than indices: the host mesh
/// APIs this feeds accept per-face point lists, so no welding or
/// deduplication happens here. Vertex order and face order follow the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Decoded vertex positions in file order (position is vertex index)
    pub vertices: Vec<Point3<f64>>,
    /// Faces as ordered point lists; degenerate faces (fewer than 3 points)
    /// pass through untouched
    pub faces: Vec<Vec<Point3<f64>>>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Assemble the terminal mesh from its decoded parts
    #[inline]
    pub fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<Vec<Point3<f64>>>) -> Self {
        Self { vertices, faces }
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get face count
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Calculate bounds (min, max) over the vertex sequence
    #[inline]
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        if self.vertices.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);

        for point in &self.vertices {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }

        (min, max)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_creation() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_from_parts_preserves_order() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let faces = vec![vec![vertices[0], vertices[1], vertices[2]]];
        let mesh = Mesh::from_parts(vertices.clone(), faces);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertices, vertices);
        assert_eq!(mesh.faces[0][1], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_faces_are_kept() {
        let vertices = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)];
        let faces = vec![vec![], vec![vertices[0], vertices[1]]];
        let mesh = Mesh::from_parts(vertices, faces);

        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.faces[0].len(), 0);
        assert_eq!(mesh.faces[1].len(), 2);
    }

    #[test]
    fn test_bounds() {
        let mesh = Mesh::from_parts(
            vec![
                Point3::new(-1.0, 2.0, 0.5),
                Point3::new(3.0, -4.0, 0.0),
                Point3::new(0.0, 0.0, 7.0),
            ],
            Vec::new(),
        );
        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(-1.0, -4.0, 0.0));
        assert_eq!(max, Point3::new(3.0, 2.0, 7.0));
    }

    #[test]
    fn test_bounds_of_empty_mesh() {
        let mesh = Mesh::new();
        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::origin());
        assert_eq!(max, Point3::origin());
    }
}
