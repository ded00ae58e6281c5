// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertex decoding

use nalgebra::Point3;
use ply_lite_core::{BodyLayout, ElementDef, LineBuffer, PlyHeader, RecordView};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// Element name holding vertex positions
pub const VERTEX_ELEMENT: &str = "vertex";

/// Decode all vertex positions, applying `scale` to every coordinate.
///
/// Vertices keep file order, so the position in the returned vector is the
/// vertex index that face records refer to.
pub fn decode_vertices(
    buffer: &LineBuffer<'_>,
    header: &PlyHeader,
    layout: &BodyLayout,
    scale: f64,
) -> Result<Vec<Point3<f64>>> {
    let (element, span) = layout
        .locate(header, VERTEX_ELEMENT)
        .ok_or_else(|| Error::MissingElement(VERTEX_ELEMENT.into()))?;
    let columns = coordinate_columns(element)?;
    let lines = span.lines_within(buffer.len())?;

    // Decode lines in parallel, then surface the first failure in file order.
    let decoded: Vec<ply_lite_core::Result<Point3<f64>>> = lines
        .into_par_iter()
        .map(|line| {
            let record = RecordView::parse(buffer, line)?;
            Ok(Point3::new(
                record.float_at(columns[0])? * scale,
                record.float_at(columns[1])? * scale,
                record.float_at(columns[2])? * scale,
            ))
        })
        .collect();

    let vertices = decoded
        .into_iter()
        .collect::<ply_lite_core::Result<Vec<_>>>()?;
    Ok(vertices)
}

/// Resolve the token columns of the `x`, `y` and `z` properties.
///
/// Columns follow property declaration order. When a name repeats, the later
/// declaration wins.
fn coordinate_columns(element: &ElementDef) -> Result<[usize; 3]> {
    let mut by_name: FxHashMap<&str, usize> = FxHashMap::default();
    for (column, property) in element.properties.iter().enumerate() {
        by_name.insert(property.name(), column);
    }

    let mut columns = [0usize; 3];
    for (slot, name) in ["x", "y", "z"].into_iter().enumerate() {
        columns[slot] = *by_name.get(name).ok_or_else(|| Error::MissingProperty {
            element: VERTEX_ELEMENT.into(),
            property: name.into(),
        })?;
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(content: &str, scale: f64) -> Result<Vec<Point3<f64>>> {
        let buffer = LineBuffer::new(content);
        let header = PlyHeader::parse(&buffer).unwrap();
        let layout = BodyLayout::map(&header);
        decode_vertices(&buffer, &header, &layout, scale)
    }

    const CUBE_CORNER: &str = "ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
end_header
0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
";

    #[test]
    fn test_decodes_vertices_in_file_order() {
        let vertices = decode(CUBE_CORNER, 1.0).unwrap();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(vertices[1], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(vertices[2], Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_scale_multiplies_every_coordinate() {
        let vertices = decode(CUBE_CORNER, 2.5).unwrap();
        assert_eq!(vertices[1], Point3::new(2.5, 0.0, 0.0));
        assert_eq!(vertices[2], Point3::new(0.0, 2.5, 0.0));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let content = "ply
format ascii 1.0
element vertex 1
property float x
property float y
property float z
property uchar red
end_header
1.0 2.0 3.0 255
";
        let vertices = decode(content, 1.0).unwrap();
        assert_eq!(vertices[0], Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_reordered_coordinate_properties() {
        let content = "ply
format ascii 1.0
element vertex 1
property float z
property float x
property float y
end_header
9.0 1.0 2.0
";
        let vertices = decode(content, 1.0).unwrap();
        assert_eq!(vertices[0], Point3::new(1.0, 2.0, 9.0));
    }

    #[test]
    fn test_missing_vertex_element() {
        let content = "ply
format ascii 1.0
element face 0
property list uchar int vertex_indices
end_header
";
        let error = decode(content, 1.0).unwrap_err();
        assert!(matches!(error, Error::MissingElement(name) if name == "vertex"));
    }

    #[test]
    fn test_missing_coordinate_property() {
        let content = "ply
format ascii 1.0
element vertex 1
property float x
property float z
end_header
1.0 2.0
";
        let error = decode(content, 1.0).unwrap_err();
        match error {
            Error::MissingProperty { element, property } => {
                assert_eq!(element, "vertex");
                assert_eq!(property, "y");
            }
            other => panic!("expected MissingProperty, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_coordinate_fails() {
        let content = "ply
format ascii 1.0
element vertex 1
property float x
property float y
property float z
end_header
1.0 oops 3.0
";
        let error = decode(content, 1.0).unwrap_err();
        assert!(matches!(
            error,
            Error::CoreError(ply_lite_core::Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_truncated_body_fails() {
        let content = "ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
end_header
0.0 0.0 0.0
";
        let error = decode(content, 1.0).unwrap_err();
        assert!(matches!(
            error,
            Error::CoreError(ply_lite_core::Error::TruncatedFile { .. })
        ));
    }

    #[test]
    fn test_overdeclared_vertex_count_reports_truncation() {
        let content = "ply
format ascii 1.0
element vertex 18446744073709551615
property float x
property float y
property float z
end_header
0.0 0.0 0.0
";
        let error = decode(content, 1.0).unwrap_err();
        assert!(matches!(
            error,
            Error::CoreError(ply_lite_core::Error::TruncatedFile { line: 8, total: 8 })
        ));
    }
}
