// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end decoding tests over the buffer -> header -> layout -> mesh
//! pipeline, without the engine wrapper.

use approx::assert_relative_eq;
use ply_lite_core::{BodyLayout, LineBuffer, PlyHeader};
use ply_lite_geometry::{decode_faces, decode_vertices, Mesh, Point3};

const QUAD: &str = "ply
format ascii 1.0
comment generated for tests
element vertex 4
property float x
property float y
property float z
element face 2
property list uchar int vertex_indices
end_header
0.0 0.0 0.0
2.0 0.0 0.0
2.0 2.0 0.0
0.0 2.0 0.0
3 0 1 2
3 0 2 3
";

/// Run the full decode pipeline at a given scale
fn decode_mesh(content: &str, scale: f64) -> ply_lite_geometry::Result<Mesh> {
    let buffer = LineBuffer::new(content);
    let header = PlyHeader::parse(&buffer)?;
    let layout = BodyLayout::map(&header);
    let vertices = decode_vertices(&buffer, &header, &layout, scale)?;
    let faces = decode_faces(&buffer, &header, &layout, &vertices)?;
    Ok(Mesh::from_parts(vertices, faces))
}

#[test]
fn test_counts_match_declarations() {
    let mesh = decode_mesh(QUAD, 1.0).unwrap();
    println!(
        "quad: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 2);
    assert_eq!(mesh.faces[0].len(), 3);
    assert_eq!(mesh.faces[1].len(), 3);
    assert_eq!(mesh.vertices[1], Point3::new(2.0, 0.0, 0.0));
    assert_eq!(mesh.faces[1][2], Point3::new(0.0, 2.0, 0.0));
}

#[test]
fn test_scale_invariance() {
    let scale = 3.5;
    let reference = decode_mesh(QUAD, 1.0).unwrap();
    let scaled = decode_mesh(QUAD, scale).unwrap();

    assert_eq!(scaled.vertex_count(), reference.vertex_count());
    for (scaled_point, reference_point) in scaled.vertices.iter().zip(&reference.vertices) {
        assert_relative_eq!(*scaled_point / scale, *reference_point, epsilon = 1e-12);
    }
}

#[test]
fn test_index_base_round_trip() {
    let zero_based = QUAD;
    let one_based = QUAD
        .replace("3 0 1 2", "3 1 2 3")
        .replace("3 0 2 3", "3 1 3 4");

    let from_zero = decode_mesh(zero_based, 1.0).unwrap();
    let from_one = decode_mesh(&one_based, 1.0).unwrap();

    assert_eq!(from_zero.faces, from_one.faces);
}

#[test]
fn test_decoding_is_deterministic() {
    let first = decode_mesh(QUAD, 1.0).unwrap();
    let second = decode_mesh(QUAD, 1.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_trailing_lines_are_ignored() {
    let mut content = QUAD.to_string();
    content.push_str("0.5 0.5 0.5\nnoise that is not a record\n");

    let mesh = decode_mesh(&content, 1.0).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 2);
}

#[test]
fn test_truncated_body_reports_line_numbers() {
    let content = "ply
format ascii 1.0
element vertex 2
property float x
property float y
property float z
element face 1
property list uchar int vertex_indices
end_header
0.0 0.0 0.0
";
    let error = decode_mesh(content, 1.0).unwrap_err();
    match error {
        ply_lite_geometry::Error::CoreError(ply_lite_core::Error::TruncatedFile {
            line,
            total,
        }) => {
            assert_eq!(line, 10);
            assert_eq!(total, 10);
        }
        other => panic!("expected TruncatedFile, got {other:?}"),
    }
}
