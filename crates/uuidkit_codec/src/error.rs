//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while converting an input value into a UUID.
///
/// Hosts that surface these functions as SQL typically collapse every
/// variant into a single "no result" outcome; the variants exist so that
/// library callers can tell what went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A hex digit was required but another character (or none) was found.
    #[error("invalid hex digit at offset {position}")]
    InvalidHexDigit {
        /// Byte offset into the input where the bad character sits.
        position: usize,
    },

    /// The input ended before all 16 bytes were decoded.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Characters remained after a complete UUID.
    #[error("trailing characters at offset {position}")]
    TrailingCharacters {
        /// Byte offset of the first unconsumed character.
        position: usize,
    },

    /// A blob input was not exactly 16 bytes long.
    #[error("blob must be exactly 16 bytes, got {length}")]
    WrongBlobLength {
        /// Actual length of the rejected blob.
        length: usize,
    },

    /// The input value is neither text nor a blob.
    #[error("unsupported input kind: {kind}")]
    UnsupportedKind {
        /// Name of the rejected value kind.
        kind: &'static str,
    },
}
