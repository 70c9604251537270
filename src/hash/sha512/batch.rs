//! Parallel hashing of independent messages.
//!
//! Each message is hashed on its own with its own state, so messages are
//! spread across the rayon thread pool with no synchronization. Blocks of
//! a single message are still processed strictly in order.

use rayon::prelude::*;

use super::core::calc_digest;
use super::digest::RawDigest;
use crate::trace;

/// Hashes every message in `messages`, returning digests in input order.
pub fn calc_digests<M>(messages: &[M]) -> Vec<RawDigest>
where
    M: AsRef<[u8]> + Sync,
{
    let total_bytes = messages.iter().map(|m| m.as_ref().len()).sum();
    trace::trace_batch(messages.len(), total_bytes);

    messages
        .par_iter()
        .map(|m| calc_digest(m.as_ref()))
        .collect()
}
