//! Known-answer self-check.
//!
//! Hashes a message through the full padding, compression and encoding
//! path and compares the result with an expected digest. A failure means
//! the arithmetic of this build is wrong (for example an endianness bug),
//! so every digest it produces is suspect. Callers using this as a
//! startup gate should abort on failure; [`SelfTest::verify`] returns an
//! error for exactly that purpose.

use super::TEST_STR_PAIR;
use super::codec::{dump_digest, read_digest};
use super::core::calc_digest;
use super::error::SelfTestError;
use crate::trace;

/// A message together with the digest it is expected to hash to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelfTest<'a> {
    /// Message to hash.
    pub message: &'a str,
    /// Expected digest as hex text, either case.
    pub expected: &'a str,
}

impl<'a> SelfTest<'a> {
    pub const fn new(message: &'a str, expected: &'a str) -> Self {
        Self { message, expected }
    }

    /// Runs the check, failing with the reason on mismatch.
    ///
    /// Digests are compared after decoding, so the case of `expected`
    /// does not matter.
    ///
    /// # Errors
    /// - [`SelfTestError::MalformedExpected`] if `expected` is not valid hex
    /// - [`SelfTestError::Mismatch`] if the digests differ
    pub fn verify(&self) -> Result<(), SelfTestError> {
        let expected = read_digest(self.expected).map_err(|err| {
            trace::trace_self_test_malformed(self.expected, &err);
            SelfTestError::MalformedExpected(err)
        })?;

        let actual = calc_digest(self.message.as_bytes());

        if actual != expected {
            let expected = dump_digest(&expected);
            let actual = dump_digest(&actual);
            trace::trace_self_test_mismatch(self.message.len(), &expected, &actual);
            return Err(SelfTestError::Mismatch { expected, actual });
        }

        trace::trace_self_test_passed(self.message.len(), self.expected);
        Ok(())
    }

    /// Runs the check, reporting only pass or fail.
    pub fn run(&self) -> bool {
        self.verify().is_ok()
    }
}

/// Checks the empty message against its published digest.
impl Default for SelfTest<'static> {
    fn default() -> Self {
        Self::new(TEST_STR_PAIR[0], TEST_STR_PAIR[1])
    }
}

/// Returns `true` if `msg` hashes to `expected`.
pub fn unit_test(msg: &str, expected: &str) -> bool {
    SelfTest::new(msg, expected).run()
}

/// [`unit_test`] with the built-in known-answer pair.
pub fn unit_test_default() -> bool {
    SelfTest::default().run()
}
