//! Error types for the coder.
//!
//! Every fallible operation returns a structured error rather than panicking;
//! all variants are recoverable at the caller. The operations are
//! deterministic, so retrying with the same inputs fails identically.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source could not be read (missing file, bad permissions).
    #[error("input unavailable: {path:?}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Zero symbols were supplied; a Huffman tree needs at least one leaf.
    #[error("empty input: nothing to encode")]
    EmptyInput,

    /// The payload's bit stream does not resolve to a complete sequence of
    /// valid codes.
    #[error("corrupt payload: {detail}")]
    DecodeCorruption { detail: String },

    /// The code table does not cover the symbols or codes in the stream.
    #[error("incompatible code table: {detail}")]
    TableMismatch { detail: String },

    /// Filesystem failure while persisting output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;
