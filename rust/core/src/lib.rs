// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # PLY-Lite Core Parser
//!
//! Fast ASCII PLY parser built with [nom](https://docs.rs/nom).
//! Provides zero-copy line scanning and typed header/record access for PLY
//! documents.
//!
//! ## Overview
//!
//! This crate provides the parsing functionality for PLY-Lite:
//!
//! - **Line Scanning**: Zero-copy line splitting using [memchr](https://docs.rs/memchr)
//! - **Header Parsing**: Typed elements, properties and encoding tags
//! - **Body Layout**: Declaration-order mapping of elements onto body lines
//! - **Record Access**: Tokenized lines with typed numeric columns
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ply_lite_core::{BodyLayout, LineBuffer, PlyHeader, RecordView};
//!
//! let content = "ply\nformat ascii 1.0\nelement vertex 1\n\
//!                property float x\nproperty float y\nproperty float z\n\
//!                end_header\n0.5 0 1\n";
//! let buffer = LineBuffer::new(content);
//! let header = PlyHeader::parse(&buffer)?;
//! header.validate()?;
//!
//! let layout = BodyLayout::map(&header);
//! let (_, span) = layout.locate(&header, "vertex").unwrap();
//! let record = RecordView::parse(&buffer, span.start)?;
//! assert_eq!(record.float_at(0)?, 0.5);
//! ```
//!
//! ## Performance
//!
//! - **Line scanning**: one SIMD-accelerated newline pass, borrowed slices only
//! - **Number parsing**: [fast-float](https://docs.rs/fast-float) and
//!   [lexical-core](https://docs.rs/lexical-core) instead of `str::parse`
//! - **Small records**: stack-allocated token vectors via
//!   [smallvec](https://docs.rs/smallvec)
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for header and schema types

pub mod error;
pub mod header;
pub mod layout;
pub mod lines;
pub mod record;
pub mod schema;

pub use error::{Error, Result};
pub use header::{header_length, PlyHeader};
pub use layout::{BodyLayout, ElementSpan};
pub use lines::LineBuffer;
pub use record::RecordView;
pub use schema::{ElementDef, Encoding, PropertyDef};
