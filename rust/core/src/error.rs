use thiserror::Error;

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a PLY document
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed header at line {line}: {reason}")]
    MalformedHeader { line: usize, reason: String },

    #[error("Unsupported encoding: {found}")]
    UnsupportedEncoding { found: String },

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Truncated file: line {line} requested but only {total} lines present")]
    TruncatedFile { line: usize, total: usize },
}
