// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element body layout
//!
//! Maps each declared element onto the contiguous run of body lines that
//! holds its records.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, Result};
use crate::header::PlyHeader;
use crate::schema::ElementDef;

/// Contiguous run of body lines belonging to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ElementSpan {
    /// Index of the first line of the run.
    pub start: usize,
    /// Number of lines in the run (the element's declared count).
    pub count: usize,
}

impl ElementSpan {
    /// Line indices covered by this span.
    pub fn lines(&self) -> std::ops::Range<usize> {
        self.start..self.start.saturating_add(self.count)
    }

    /// Line indices covered by this span, bounded by the lines actually
    /// present.
    ///
    /// Declared counts come straight from the header, so a span can reach
    /// past the end of a short file. The error reports the first line the
    /// file is missing.
    pub fn lines_within(&self, total: usize) -> Result<std::ops::Range<usize>> {
        let lines = self.lines();
        if lines.end > total {
            return Err(Error::TruncatedFile {
                line: lines.start.max(total),
                total,
            });
        }
        Ok(lines)
    }
}

/// Body layout for a parsed header: one span per element, in declaration
/// order, packed immediately after the header block.
#[derive(Debug, Clone)]
pub struct BodyLayout {
    spans: Vec<ElementSpan>,
}

impl BodyLayout {
    /// Walks the element sequence with a line cursor starting at the end of
    /// the header block. Trailing lines beyond all declared counts stay
    /// unmapped. Whether the file actually contains the mapped lines is not
    /// checked here; decoders bound each span with
    /// [`ElementSpan::lines_within`] before reading records.
    pub fn map(header: &PlyHeader) -> Self {
        let mut cursor = header.line_count;
        let spans = header
            .elements
            .iter()
            .map(|element| {
                let span = ElementSpan {
                    start: cursor,
                    count: element.count,
                };
                cursor = cursor.saturating_add(element.count);
                span
            })
            .collect();
        Self { spans }
    }

    /// Span of the element at `index` in declaration order.
    pub fn span(&self, index: usize) -> Option<ElementSpan> {
        self.spans.get(index).copied()
    }

    /// Element-and-span pair for the first element named `name`.
    pub fn locate<'h>(
        &self,
        header: &'h PlyHeader,
        name: &str,
    ) -> Option<(&'h ElementDef, ElementSpan)> {
        let index = header.element_index(name)?;
        Some((&header.elements[index], self.span(index)?))
    }

    /// Number of mapped spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
