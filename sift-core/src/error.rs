//! Error types shared across the engine.

use thiserror::Error;

/// Errors produced by ingestion, lookup and the posting codec.
///
/// End of stream is not represented here: token streams signal
/// exhaustion with `Ok(None)` and searches that match nothing return
/// empty results.
#[derive(Debug, Error)]
pub enum Error {
    /// A term-store lookup missed.
    #[error("term not found")]
    TermNotFound,

    /// A document stream contained bytes that are not valid UTF-8.
    #[error("invalid utf-8 in document stream")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A posting frame ended before the length its header promised.
    #[error("posting frame truncated")]
    TruncatedFrame,

    /// Error from an underlying reader or writer, passed through
    /// unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
