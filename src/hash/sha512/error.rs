//! Error types for digest decoding, block compression and self-checks.

use thiserror::Error;

use super::{BLK_LEN, HEX_LEN};

/// Errors produced when the caller hands in malformed input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DigestError {
    /// The hex text does not have exactly 128 bytes.
    #[error("hex digest must be {expected} characters long, got {len}", expected = HEX_LEN)]
    InvalidLength {
        /// Length of the rejected input in bytes.
        len: usize,
    },
    /// The hex text contains something other than `[0-9a-fA-F]`.
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidCharacter {
        /// The first offending character.
        character: char,
        /// Its byte offset in the input.
        index: usize,
    },
    /// A block buffer whose length is not a whole number of blocks.
    #[error("block buffer of {len} bytes is not a multiple of {block} bytes", block = BLK_LEN)]
    UnalignedBlocks {
        /// Length of the rejected buffer in bytes.
        len: usize,
    },
}

/// Failure of the known-answer self-check.
///
/// Either way the build's digests cannot be trusted.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SelfTestError {
    /// The expected digest was not valid hex.
    #[error("self-test expectation is not a valid digest: {0}")]
    MalformedExpected(#[source] DigestError),
    /// The computed digest differs from the expected one.
    #[error("self-test digest mismatch: expected {expected}, got {actual}")]
    Mismatch {
        /// Expected digest, lowercase hex.
        expected: String,
        /// Computed digest, lowercase hex.
        actual: String,
    },
}
