// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stage progress reporting.

use serde::Serialize;

/// Pipeline stages announced while an import runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStage {
    ReadFile,
    ParseHeader,
    MapElements,
    DecodeVertices,
    DecodeFaces,
    BuildMesh,
}

impl ImportStage {
    /// Human-readable progress label.
    pub fn describe(self) -> &'static str {
        match self {
            Self::ReadFile => "Reading file",
            Self::ParseHeader => "Parsing header",
            Self::MapElements => "Mapping elements",
            Self::DecodeVertices => "Decoding vertices",
            Self::DecodeFaces => "Decoding faces",
            Self::BuildMesh => "Building mesh",
        }
    }
}

/// Sink for stage announcements. Purely observational: reports never change
/// what the import does.
pub trait ProgressSink {
    /// Called once when the import enters `stage`.
    fn stage(&mut self, stage: ImportStage);
}

/// Sink that drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn stage(&mut self, _stage: ImportStage) {}
}
