// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line buffer over borrowed PLY text
//!
//! The document is split exactly once into trimmed line slices; every later
//! stage reads lines by index from this buffer.

use memchr::memchr_iter;

/// Borrowed view of a PLY document as an ordered sequence of trimmed lines.
///
/// Line slices point into the source text; the buffer owns nothing and copies
/// nothing. Index positions are stable for the lifetime of the buffer and are
/// the line numbers used in error reporting.
#[derive(Debug)]
pub struct LineBuffer<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineBuffer<'a> {
    /// Splits `content` into trimmed lines using a SIMD newline scan.
    ///
    /// A trailing newline does not produce an empty final line; a final
    /// segment without one is still a line. Blank interior lines are kept so
    /// body line indices stay aligned with the file. Trimming removes `\r`
    /// along with other edge whitespace, so CRLF input needs no special
    /// handling.
    pub fn new(content: &'a str) -> Self {
        let bytes = content.as_bytes();
        // Capacity guess: PLY body lines are short (a few coordinates each).
        let mut lines = Vec::with_capacity(bytes.len() / 16 + 1);
        let mut start = 0usize;
        for nl in memchr_iter(b'\n', bytes) {
            lines.push(content[start..nl].trim());
            start = nl + 1;
        }
        if start < bytes.len() {
            lines.push(content[start..].trim());
        }
        Self { lines }
    }

    /// Line at `index`, or `None` past the end of the file.
    #[inline]
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// Total number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in file order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }
}
