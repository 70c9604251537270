//! Structured log events.
//!
//! Every helper compiles to a no-op when the `tracing` feature is off.
//! Nothing on the per-block hashing path is logged.

#[cfg(feature = "tracing")]
use tracing::{debug, error};

/// Self-test produced the expected digest.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_self_test_passed(msg_len: usize, digest: &str) {
    debug!(
        target: "syncsum::sha512",
        msg_len = msg_len,
        digest = digest,
        "self-test passed"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_self_test_passed(_msg_len: usize, _digest: &str) {}

/// Self-test produced a different digest than expected.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_self_test_mismatch(msg_len: usize, expected: &str, actual: &str) {
    error!(
        target: "syncsum::sha512",
        msg_len = msg_len,
        expected = expected,
        actual = actual,
        "self-test digest mismatch"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_self_test_mismatch(_msg_len: usize, _expected: &str, _actual: &str) {}

/// Self-test was given an expected digest that is not valid hex.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_self_test_malformed(expected: &str, reason: &dyn std::error::Error) {
    error!(
        target: "syncsum::sha512",
        expected = expected,
        reason = %reason,
        "self-test expectation is malformed"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_self_test_malformed(_expected: &str, _reason: &dyn std::error::Error) {}

/// A parallel batch is about to be hashed.
#[cfg(all(feature = "tracing", feature = "parallel"))]
#[inline]
pub(crate) fn trace_batch(messages: usize, total_bytes: usize) {
    debug!(
        target: "syncsum::sha512",
        messages = messages,
        total_bytes = total_bytes,
        "hashing batch in parallel"
    );
}

#[cfg(all(not(feature = "tracing"), feature = "parallel"))]
#[inline]
pub(crate) fn trace_batch(_messages: usize, _total_bytes: usize) {}
