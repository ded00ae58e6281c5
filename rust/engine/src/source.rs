// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! File access for import runs.

use std::borrow::Cow;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::{Error, Result};

#[derive(Debug)]
enum Bytes {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// A PLY source file, memory-mapped where possible.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    bytes: Bytes,
}

impl FileSource {
    /// Open a file for import.
    ///
    /// An unreadable path reports `FileNotFound`; other I/O failures
    /// propagate as-is.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|error| match error.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => Error::FileNotFound {
                path: path.clone(),
            },
            _ => Error::Io(error),
        })?;

        // Zero-length mappings are rejected by the OS.
        let bytes = if file.metadata()?.len() == 0 {
            Bytes::Owned(Vec::new())
        } else {
            // Safety: read-only mapping, and the mapping itself keeps the
            // file handle alive.
            let mapping = unsafe { Mmap::map(&file)? };
            Bytes::Mapped(mapping)
        };

        Ok(Self { path, bytes })
    }

    /// Path this source was opened from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            Bytes::Mapped(mapping) => mapping,
            Bytes::Owned(bytes) => bytes,
        }
    }

    /// File size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True for a zero-length file.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// File content as text, replacing invalid UTF-8 sequences.
    ///
    /// Binary PLY payloads are not valid UTF-8 past the header; lossy
    /// decoding keeps the header lines readable so the declared encoding can
    /// still be reported.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}
