// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Import summary and statistics.

use serde::{Deserialize, Serialize};

/// Summary of a completed import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Encoding token from the header (always "ascii" for a successful run).
    pub encoding: String,
    /// Comment lines recorded while parsing the header, verbatim.
    pub comments: Vec<String>,
    /// Number of decoded vertices.
    pub vertex_count: usize,
    /// Number of decoded faces.
    pub face_count: usize,
    /// Timing statistics.
    pub stats: ImportStats,
}

/// Import timing statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportStats {
    /// Time spent loading lines and parsing the header (ms).
    pub header_ms: u64,
    /// Time spent decoding vertices and faces (ms).
    pub decode_ms: u64,
    /// Time spent assembling the mesh (ms).
    pub assembly_ms: u64,
    /// Total import time (ms).
    pub total_ms: u64,
}
