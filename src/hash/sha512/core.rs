//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a multi-block compression entry point for callers that manage their
//!   own state
//! - a complete SHA-512 hashing function for arbitrary-length input

use super::computations::all_rounds;
use super::digest::RawDigest;
use super::error::DigestError;
use super::padding;
use super::{BLK_LEN, Block, H512_INIT, State};

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - The message schedule is partially expanded here and fully processed
///   by `all_rounds`.
/// - Input words are interpreted as big-endian, as required by SHA-512.
pub fn compress(block: &Block, state: &mut State) {
    // Message schedule (first 16 words)
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(word);
    }

    all_rounds(state, w);
}

/// Compresses a buffer of whole blocks into `state`, in order.
///
/// The buffer length must be a multiple of [`BLK_LEN`]; an empty buffer
/// leaves the state unchanged. No padding is applied, so this is the
/// building block for callers that feed a message in pieces and pad the
/// end themselves (see [`padding::split`]).
///
/// # Errors
/// Returns [`DigestError::UnalignedBlocks`] without touching `state` when
/// `blocks` is not block-aligned.
pub fn dm_compress(state: &mut State, blocks: &[u8]) -> Result<(), DigestError> {
    if !blocks.len().is_multiple_of(BLK_LEN) {
        return Err(DigestError::UnalignedBlocks { len: blocks.len() });
    }

    compress_aligned(state, blocks);
    Ok(())
}

fn compress_aligned(state: &mut State, blocks: &[u8]) {
    for chunk in blocks.chunks_exact(BLK_LEN) {
        let mut block = [0u8; BLK_LEN];
        block.copy_from_slice(chunk);
        compress(&block, state);
    }
}

/// Computes the SHA-512 hash of the given input.
///
/// This function processes the input message in 1024-bit blocks, applies
/// the SHA-512 padding rules, and returns the final 512-bit hash value.
///
/// # Notes
/// - The implementation follows the standard Merkle–Damgård construction.
/// - Message length is encoded as a 128-bit big-endian integer (in bits).
/// - The internal state uses 8 × 64-bit words and is serialized in big-endian.
/// - No heap allocations are performed.
pub fn calc_digest(input: &[u8]) -> RawDigest {
    let mut state = H512_INIT;

    let (body, tail) = padding::split(input);

    compress_aligned(&mut state, body);

    for block in tail.as_blocks() {
        compress(block, &mut state);
    }

    RawDigest::from(state)
}
