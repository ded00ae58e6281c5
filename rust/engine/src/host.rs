// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host collaborator seams: the confirmation gate and the mesh builder.

use ply_lite_geometry::{Mesh, Point3};

/// Proceed/cancel decision consulted after face decoding and before mesh
/// assembly.
pub trait ImportGate {
    /// Decide whether to assemble a mesh with `face_count` faces.
    fn confirm(&mut self, face_count: usize) -> bool;
}

/// Gate that always proceeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ImportGate for AcceptAll {
    fn confirm(&mut self, _face_count: usize) -> bool {
        true
    }
}

/// Host-provided mesh construction capability.
///
/// Faces arrive as ordered point lists; index sharing, degenerate-face
/// policy and triangulation are the host API's concern.
pub trait MeshBuilder {
    /// Announce the totals before the first polygon arrives.
    fn begin(&mut self, vertex_count: usize, face_count: usize);
    /// Add one face as an ordered point list.
    fn add_polygon(&mut self, points: &[Point3<f64>]);
}

/// Feed a decoded mesh to a host mesh builder, face by face.
pub fn deliver(mesh: &Mesh, builder: &mut dyn MeshBuilder) {
    builder.begin(mesh.vertex_count(), mesh.face_count());
    for face in &mesh.faces {
        builder.add_polygon(face);
    }
}

/// Builder that collects polygons into plain vectors.
#[derive(Debug, Clone, Default)]
pub struct PolygonSoup {
    /// Collected faces in delivery order.
    pub polygons: Vec<Vec<Point3<f64>>>,
}

impl MeshBuilder for PolygonSoup {
    fn begin(&mut self, _vertex_count: usize, face_count: usize) {
        self.polygons.reserve(face_count);
    }

    fn add_polygon(&mut self, points: &[Point3<f64>]) {
        self.polygons.push(points.to_vec());
    }
}
