// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face decoding

use nalgebra::Point3;
use ply_lite_core::{BodyLayout, ElementDef, LineBuffer, PlyHeader, RecordView};
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Element name holding face connectivity
pub const FACE_ELEMENT: &str = "face";

/// Property names accepted for the vertex index list
const INDEX_PROPERTY_NAMES: [&str; 2] = ["vertex_index", "vertex_indices"];

/// Raw per-face index list before base normalization
type IndexList = SmallVec<[i64; 8]>;

/// Decode all faces into ordered lists of resolved vertex positions.
///
/// Index base is inferred once over the whole face set: any literal 0 marks
/// the file 0-based, otherwise every index is shifted down by one. Mixed
/// conventions within one file are not supported.
pub fn decode_faces(
    buffer: &LineBuffer<'_>,
    header: &PlyHeader,
    layout: &BodyLayout,
    vertices: &[Point3<f64>],
) -> Result<Vec<Vec<Point3<f64>>>> {
    let (element, span) = layout
        .locate(header, FACE_ELEMENT)
        .ok_or_else(|| Error::MissingElement(FACE_ELEMENT.into()))?;
    let list_column = index_list_column(element)?;
    let lines = span.lines_within(buffer.len())?;

    let decoded: Vec<ply_lite_core::Result<IndexList>> = lines
        .into_par_iter()
        .map(|line| {
            let record = RecordView::parse(buffer, line)?;
            let declared = record.int_at(list_column)?;
            let count = usize::try_from(declared).unwrap_or(0);
            // Cap the allocation at the tokens present; the read loop
            // reports the shortfall.
            let mut indices = IndexList::with_capacity(count.min(record.len()));
            for slot in 0..count {
                indices.push(record.int_at(list_column + 1 + slot)?);
            }
            Ok(indices)
        })
        .collect();
    let raw = decoded
        .into_iter()
        .collect::<ply_lite_core::Result<Vec<IndexList>>>()?;

    let shift: i64 = if is_zero_based(&raw) { 0 } else { 1 };

    let mut faces = Vec::with_capacity(raw.len());
    for list in raw {
        let mut face = Vec::with_capacity(list.len());
        for index in list {
            let resolved = index.saturating_sub(shift);
            let slot = usize::try_from(resolved)
                .ok()
                .filter(|&slot| slot < vertices.len())
                .ok_or(Error::IndexOutOfRange {
                    index: resolved,
                    limit: vertices.len(),
                })?;
            face.push(vertices[slot]);
        }
        faces.push(face);
    }
    Ok(faces)
}

/// Find the token column of the vertex index list property.
///
/// Later declarations win when several list properties match.
fn index_list_column(element: &ElementDef) -> Result<usize> {
    let mut column = None;
    for (position, property) in element.properties.iter().enumerate() {
        if property.is_list() && INDEX_PROPERTY_NAMES.contains(&property.name()) {
            column = Some(position);
        }
    }
    column.ok_or_else(|| Error::MissingProperty {
        element: FACE_ELEMENT.into(),
        property: "vertex_indices".into(),
    })
}

/// A single literal 0 anywhere marks the whole file 0-based.
fn is_zero_based(lists: &[IndexList]) -> bool {
    lists.iter().any(|list| list.iter().any(|&index| index == 0))
}
