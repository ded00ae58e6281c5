// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Record tokenizing and numeric parsing
//!
//! One body line at a time: whitespace splitting into a stack-allocated
//! token vector, then typed column access backed by fast-float and
//! lexical-core.

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::lines::LineBuffer;

/// Tokenized view of one body line.
///
/// Tokens borrow from the line buffer's source text. Column positions are
/// the property positions declared in the header for the owning element.
#[derive(Debug)]
pub struct RecordView<'a> {
    line: usize,
    tokens: SmallVec<[&'a str; 12]>,
}

impl<'a> RecordView<'a> {
    /// Tokenizes the line at `index`. A line beyond the end of the buffer is
    /// a truncation failure: the header promised more records than the file
    /// holds.
    pub fn parse(buffer: &LineBuffer<'a>, index: usize) -> Result<Self> {
        let text = buffer.line(index).ok_or(Error::TruncatedFile {
            line: index,
            total: buffer.len(),
        })?;
        Ok(Self {
            line: index,
            tokens: text.split_whitespace().collect(),
        })
    }

    /// 0-based line index this record came from.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Number of whitespace-separated tokens on the line.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw token at `column`, if present.
    #[inline]
    pub fn token(&self, column: usize) -> Option<&'a str> {
        self.tokens.get(column).copied()
    }

    /// Float column via fast-float; a missing or non-numeric token is a
    /// malformed record.
    pub fn float_at(&self, column: usize) -> Result<f64> {
        let token = self.token(column).ok_or_else(|| self.missing(column))?;
        fast_float::parse(token).map_err(|_| self.not_numeric(column, token))
    }

    /// Integer column via lexical-core; a missing or non-numeric token is a
    /// malformed record.
    pub fn int_at(&self, column: usize) -> Result<i64> {
        let token = self.token(column).ok_or_else(|| self.missing(column))?;
        lexical_core::parse::<i64>(token.as_bytes()).map_err(|_| self.not_numeric(column, token))
    }

    fn missing(&self, column: usize) -> Error {
        Error::MalformedRecord {
            line: self.line,
            reason: format!("missing column {}", column),
        }
    }

    fn not_numeric(&self, column: usize, token: &str) -> Error {
        Error::MalformedRecord {
            line: self.line,
            reason: format!("column {} is not numeric: {:?}", column, token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_on_any_whitespace() {
        let buffer = LineBuffer::new("1.5  -2.0\t3\n");
        let record = RecordView::parse(&buffer, 0).unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.token(0), Some("1.5"));
        assert_eq!(record.token(2), Some("3"));
        assert_eq!(record.token(3), None);
    }

    #[test]
    fn test_float_and_int_columns() {
        let buffer = LineBuffer::new("3 0.5 -1e2 7\n");
        let record = RecordView::parse(&buffer, 0).unwrap();
        assert_eq!(record.int_at(0).unwrap(), 3);
        assert_eq!(record.float_at(1).unwrap(), 0.5);
        assert_eq!(record.float_at(2).unwrap(), -100.0);
        assert_eq!(record.int_at(3).unwrap(), 7);
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let buffer = LineBuffer::new("1 2\n");
        let record = RecordView::parse(&buffer, 0).unwrap();
        let err = record.float_at(2).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 0, .. }));
    }

    #[test]
    fn test_non_numeric_token_is_malformed() {
        let buffer = LineBuffer::new("x y z\n");
        let record = RecordView::parse(&buffer, 0).unwrap();
        assert!(matches!(
            record.float_at(0),
            Err(Error::MalformedRecord { .. })
        ));
        assert!(matches!(
            record.int_at(1),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_partial_numeric_token_is_malformed() {
        let buffer = LineBuffer::new("12abc\n");
        let record = RecordView::parse(&buffer, 0).unwrap();
        assert!(matches!(
            record.int_at(0),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_line_past_end_is_truncated() {
        let buffer = LineBuffer::new("only one line\n");
        let err = RecordView::parse(&buffer, 5).unwrap_err();
        assert!(matches!(err, Error::TruncatedFile { line: 5, total: 1 }));
    }
}
