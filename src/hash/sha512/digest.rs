//! SHA-512 digest values.
//!
//! A digest travels in two interchangeable forms:
//! - [`RawDigest`]: the 64 output bytes, for binary transport
//! - [`HexDigest`]: 128 lowercase hex characters plus a trailing NUL, a
//!   fixed-size text form that never needs a heap allocation
//!
//! Both have an all-zero "null" value used as a sentinel.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use super::codec;
use super::error::DigestError;
use super::{HEX_LEN, SHA_LEN, State};

/// A raw 512-bit SHA-512 digest.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawDigest(pub(crate) [u8; SHA_LEN]);

/// The all-zero raw digest.
pub const NULL_RAW_DIGEST: RawDigest = RawDigest::NULL;

/// The all-`'0'` hex digest.
pub const NULL_HEX_DIGEST: HexDigest = HexDigest::NULL;

impl RawDigest {
    /// The all-zero digest.
    pub const NULL: Self = Self([0u8; SHA_LEN]);

    /// Returns `true` for the all-zero sentinel.
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// The digest bytes.
    pub const fn as_bytes(&self) -> &[u8; SHA_LEN] {
        &self.0
    }

    /// Encodes the digest into its fixed-size hex form.
    pub fn to_hex(&self) -> HexDigest {
        let mut hex = HexDigest::NULL;
        codec::dump_digest_into(self, &mut hex);
        hex
    }
}

/// Serializes a final hash state as eight big-endian words.
impl From<State> for RawDigest {
    fn from(state: State) -> Self {
        let mut out = [0u8; SHA_LEN];

        for (chunk, word) in out.chunks_exact_mut(8).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        RawDigest(out)
    }
}

impl From<[u8; SHA_LEN]> for RawDigest {
    fn from(bytes: [u8; SHA_LEN]) -> Self {
        RawDigest(bytes)
    }
}

impl From<RawDigest> for [u8; SHA_LEN] {
    fn from(digest: RawDigest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for RawDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// `[u8; 64]` has no `Default` on every supported toolchain, so this is
/// written out by hand. The default is the null digest.
impl Default for RawDigest {
    fn default() -> Self {
        Self::NULL
    }
}

impl Debug for RawDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "RawDigest({})", self.to_hex())
    }
}

/// Formats the digest as 128 lowercase hex characters.
impl Display for RawDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_hex(), f)
    }
}

impl FromStr for RawDigest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::read_digest(s)
    }
}

/// A SHA-512 digest as NUL-terminated lowercase hex text.
///
/// The first 128 bytes are always lowercase ASCII hex digits and the last
/// byte is always `0`. Values are only produced by encoding a
/// [`RawDigest`] or by parsing, so that invariant cannot be broken from
/// outside the crate.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexDigest(pub(crate) [u8; HEX_LEN + 1]);

impl HexDigest {
    /// 128 `'0'` characters followed by the NUL sentinel.
    pub const NULL: Self = {
        let mut chars = [b'0'; HEX_LEN + 1];
        chars[HEX_LEN] = 0;
        HexDigest(chars)
    };

    /// The 128 hex characters, without the sentinel.
    pub fn as_str(&self) -> &str {
        let text = std::str::from_utf8(&self.0[..HEX_LEN]);
        debug_assert!(text.is_ok(), "hex digest holds non-ASCII bytes");
        text.unwrap_or_default()
    }

    /// All 129 storage bytes, including the trailing NUL.
    pub const fn as_bytes_with_nul(&self) -> &[u8; HEX_LEN + 1] {
        &self.0
    }

    /// Returns `true` for the all-`'0'` sentinel.
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl Default for HexDigest {
    fn default() -> Self {
        Self::NULL
    }
}

impl Debug for HexDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "HexDigest({})", self.as_str())
    }
}

impl Display for HexDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for HexDigest {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Parses hex text in either case; the stored form is always lowercase.
impl FromStr for HexDigest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::read_digest(s).map(|raw| raw.to_hex())
    }
}

impl From<RawDigest> for HexDigest {
    fn from(raw: RawDigest) -> Self {
        raw.to_hex()
    }
}

impl From<&HexDigest> for String {
    fn from(hex: &HexDigest) -> Self {
        hex.as_str().to_owned()
    }
}
