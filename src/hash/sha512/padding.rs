//! Message padding and block parsing.
//!
//! A message of `len` bytes is extended with a single `0x80` byte, the
//! minimum number of zero bytes that brings the length to 112 mod 128,
//! and the bit length as a 128-bit big-endian integer. The result is a
//! whole number of 128-byte blocks.
//!
//! Whole blocks of the message are borrowed as-is; only the final one or
//! two blocks are synthesized. Nothing here allocates.

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use super::{BLK_LEN, Block};

/// Offset of the 128-bit length field inside the final block.
const LEN_OFFSET: usize = BLK_LEN - 16;

/// Returns the total length in bytes of the padded message.
///
/// Always a non-zero multiple of [`BLK_LEN`] for any `len` up to
/// `isize::MAX`, the longest possible slice.
///
/// # Panics
/// In debug builds, if `len` is within 256 of `usize::MAX`; no slice can
/// be that long.
pub const fn padded_len(len: usize) -> usize {
    let body = len - len % BLK_LEN;
    if len % BLK_LEN < LEN_OFFSET {
        body + BLK_LEN
    } else {
        body + 2 * BLK_LEN
    }
}

/// The synthesized final blocks of a padded message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tail {
    blocks: [Block; 2],
    count: usize,
}

impl Tail {
    /// Builds the trailing blocks from the leftover bytes `rest`
    /// (fewer than [`BLK_LEN`]) of a message that is `msg_len` bytes long.
    fn new(rest: &[u8], msg_len: usize) -> Self {
        debug_assert!(rest.len() < BLK_LEN);

        let mut blocks = [[0u8; BLK_LEN]; 2];
        let rem = rest.len();

        blocks[0][..rem].copy_from_slice(rest);
        blocks[0][rem] = 0x80;

        // No room left for the length field: it spills into a second block.
        let count = if rem < LEN_OFFSET { 1 } else { 2 };

        // Widening before the shift keeps the bit count exact for any usize.
        let bit_len = (msg_len as u128) << 3;
        blocks[count - 1][LEN_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());

        Self { blocks, count }
    }

    /// The one or two trailing blocks, in order.
    pub fn as_blocks(&self) -> &[Block] {
        &self.blocks[..self.count]
    }

    /// Number of synthesized blocks (1 or 2).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always `false`: every padded message ends in at least one block.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Splits a message into its whole-block body and its padded tail.
///
/// The body is a prefix of `msg` whose length is a multiple of
/// [`BLK_LEN`] (possibly empty). Hashing the body followed by the tail
/// blocks is exactly hashing the padded message.
pub fn split(msg: &[u8]) -> (&[u8], Tail) {
    let (body, rest) = msg.split_at(msg.len() - msg.len() % BLK_LEN);
    (body, Tail::new(rest, msg.len()))
}

/// Iterator over every block of a padded message.
///
/// Created by [`blocks`].
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    body: ChunksExact<'a, u8>,
    tail: Tail,
    next_tail: usize,
}

/// Returns an iterator over the padded blocks of `msg`, in order.
pub fn blocks(msg: &[u8]) -> Blocks<'_> {
    let (body, tail) = split(msg);

    Blocks {
        body: body.chunks_exact(BLK_LEN),
        tail,
        next_tail: 0,
    }
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if let Some(chunk) = self.body.next() {
            let mut block = [0u8; BLK_LEN];
            block.copy_from_slice(chunk);
            return Some(block);
        }

        let block = self.tail.as_blocks().get(self.next_tail).copied()?;
        self.next_tail += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.body.len() + self.tail.len() - self.next_tail;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}
