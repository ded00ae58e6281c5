// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Import orchestration: runs the parse and decode pipeline end to end.

use std::path::Path;

use ply_lite_core::{BodyLayout, LineBuffer, PlyHeader};
use ply_lite_geometry::{decode_faces, decode_vertices, Mesh};

use crate::config::ImportConfig;
use crate::error::{Error, Result};
use crate::events::{ImportStage, NullProgress, ProgressSink};
use crate::host::{AcceptAll, ImportGate};
use crate::source::FileSource;
use crate::summary::{ImportStats, ImportSummary};

/// Announce a stage to the sink and the trace log.
fn advance(sink: &mut dyn ProgressSink, stage: ImportStage) {
    tracing::debug!(stage = stage.describe(), "Stage transition");
    sink.stage(stage);
}

/// Result of a completed import.
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// The assembled mesh.
    pub mesh: Mesh,
    /// Counts, header diagnostics and timings.
    pub summary: ImportSummary,
}

/// PLY import facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct Importer {
    config: ImportConfig,
}

impl Importer {
    /// Importer with the given configuration.
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import a file with default collaborators: no progress reporting and an
    /// always-proceed gate.
    pub fn import_path(&self, path: impl AsRef<Path>) -> Result<ImportResult> {
        self.import_path_with(path, &mut NullProgress, &mut AcceptAll)
    }

    /// Import a file, announcing stages to `sink` and consulting `gate`
    /// before mesh assembly.
    pub fn import_path_with(
        &self,
        path: impl AsRef<Path>,
        sink: &mut dyn ProgressSink,
        gate: &mut dyn ImportGate,
    ) -> Result<ImportResult> {
        advance(sink, ImportStage::ReadFile);
        let source = FileSource::open(path)?;
        tracing::info!(
            path = %source.path().display(),
            bytes = source.len(),
            "Opened PLY source"
        );
        self.run(&source.text(), sink, gate)
    }

    /// Import content already held in memory.
    pub fn import_content(&self, content: &str) -> Result<ImportResult> {
        self.import_content_with(content, &mut NullProgress, &mut AcceptAll)
    }

    /// In-memory variant of [`Importer::import_path_with`].
    pub fn import_content_with(
        &self,
        content: &str,
        sink: &mut dyn ProgressSink,
        gate: &mut dyn ImportGate,
    ) -> Result<ImportResult> {
        self.run(content, sink, gate)
    }

    fn run(
        &self,
        content: &str,
        sink: &mut dyn ProgressSink,
        gate: &mut dyn ImportGate,
    ) -> Result<ImportResult> {
        let total_start = std::time::Instant::now();

        let header_start = std::time::Instant::now();
        let buffer = LineBuffer::new(content);

        advance(sink, ImportStage::ParseHeader);
        let header = PlyHeader::parse(&buffer)?;
        header.validate()?;

        advance(sink, ImportStage::MapElements);
        let layout = BodyLayout::map(&header);
        let header_time = header_start.elapsed();
        tracing::info!(
            lines = buffer.len(),
            header_lines = header.line_count,
            elements = header.elements.len(),
            header_time_ms = header_time.as_millis(),
            "Header parsed"
        );

        let decode_start = std::time::Instant::now();
        advance(sink, ImportStage::DecodeVertices);
        let vertices = decode_vertices(&buffer, &header, &layout, self.config.scale)?;

        advance(sink, ImportStage::DecodeFaces);
        let faces = decode_faces(&buffer, &header, &layout, &vertices)?;
        let decode_time = decode_start.elapsed();
        tracing::info!(
            vertices = vertices.len(),
            faces = faces.len(),
            decode_time_ms = decode_time.as_millis(),
            "Geometry decoded"
        );

        // Face count goes to the caller before any mesh exists; declining
        // leaves no partial mesh behind.
        if !gate.confirm(faces.len()) {
            tracing::info!(faces = faces.len(), "Import cancelled at confirmation gate");
            return Err(Error::Cancelled);
        }

        let assembly_start = std::time::Instant::now();
        advance(sink, ImportStage::BuildMesh);
        let encoding = header
            .encoding
            .as_ref()
            .map(|declared| declared.token().to_string())
            .unwrap_or_default();
        let comments = header.comments.clone();
        let mesh = Mesh::from_parts(vertices, faces);
        let assembly_time = assembly_start.elapsed();
        let total_time = total_start.elapsed();

        let summary = ImportSummary {
            encoding,
            comments,
            vertex_count: mesh.vertex_count(),
            face_count: mesh.face_count(),
            stats: ImportStats {
                header_ms: header_time.as_millis() as u64,
                decode_ms: decode_time.as_millis() as u64,
                assembly_ms: assembly_time.as_millis() as u64,
                total_ms: total_time.as_millis() as u64,
            },
        };
        tracing::info!(
            vertices = summary.vertex_count,
            faces = summary.face_count,
            total_time_ms = summary.stats.total_ms,
            "Import complete"
        );

        Ok(ImportResult { mesh, summary })
    }
}
