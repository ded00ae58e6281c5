// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # PLY-Lite Import Engine
//!
//! Backend-neutral import facade over the core parser and the geometry
//! decoder. Callers hand in a file path (or in-memory content) plus an
//! [`ImportConfig`], and receive an assembled [`Mesh`] with an
//! [`ImportSummary`], or a typed [`Error`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ply_lite_engine::{ImportConfig, Importer};
//!
//! let importer = Importer::new(ImportConfig::default());
//! let result = importer.import_path("model.ply")?;
//! println!(
//!     "{} vertices, {} faces",
//!     result.summary.vertex_count, result.summary.face_count
//! );
//! ```
//!
//! Hosts that need interactivity inject a [`ProgressSink`] for stage
//! reporting and an [`ImportGate`] for the proceed/cancel checkpoint that
//! runs after face decoding and before mesh assembly.

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod importer;
pub mod source;
pub mod summary;

pub use config::ImportConfig;
pub use error::{Error, Result};
pub use events::{ImportStage, NullProgress, ProgressSink};
pub use host::{deliver, AcceptAll, ImportGate, MeshBuilder, PolygonSoup};
pub use importer::{ImportResult, Importer};
pub use source::FileSource;
pub use summary::{ImportStats, ImportSummary};

// Re-export the mesh types hosts consume.
pub use ply_lite_geometry::{Mesh, Point3};
