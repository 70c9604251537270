//! Conversions between raw and hexadecimal digests.
//!
//! Encoding writes two lowercase characters per byte, most significant
//! nibble first. Decoding accepts either case but requires exactly
//! [`HEX_LEN`] hex digits; anything else is rejected rather than
//! truncated or padded.

use super::digest::{HexDigest, RawDigest};
use super::error::DigestError;
use super::{HEX_LEN, SHA_LEN};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Writes the hex form of `raw` into caller-provided fixed storage.
///
/// Performs no allocation. The NUL sentinel at the end of `out` is left
/// in place.
pub fn dump_digest_into(raw: &RawDigest, out: &mut HexDigest) {
    for (pair, &byte) in out.0[..HEX_LEN].chunks_exact_mut(2).zip(raw.0.iter()) {
        pair[0] = HEX_CHARS[usize::from(byte >> 4)];
        pair[1] = HEX_CHARS[usize::from(byte & 0x0f)];
    }
    out.0[HEX_LEN] = 0;
}

/// Returns the hex form of `raw` as an owned string.
pub fn dump_digest(raw: &RawDigest) -> String {
    let mut hex = HexDigest::NULL;
    dump_digest_into(raw, &mut hex);
    String::from(&hex)
}

/// Decodes a 128-character hex string into a raw digest.
///
/// # Errors
/// - [`DigestError::InvalidLength`] if `hex` is not exactly 128 bytes long
/// - [`DigestError::InvalidCharacter`] at the first non-hex character
pub fn read_digest(hex: &str) -> Result<RawDigest, DigestError> {
    let bytes = hex.as_bytes();

    if bytes.len() != HEX_LEN {
        return Err(DigestError::InvalidLength { len: bytes.len() });
    }

    let mut out = [0u8; SHA_LEN];

    for (i, slot) in out.iter_mut().enumerate() {
        let hi = nibble(hex, 2 * i)?;
        let lo = nibble(hex, 2 * i + 1)?;
        *slot = (hi << 4) | lo;
    }

    Ok(RawDigest(out))
}

/// Decodes the fixed-size hex form.
///
/// A [`HexDigest`] built by this crate is always well formed, so this
/// only fails if that invariant were broken.
pub fn read_hex_digest(hex: &HexDigest) -> Result<RawDigest, DigestError> {
    read_digest(hex.as_str())
}

/// Value of the hex digit at byte offset `index` of `hex`.
fn nibble(hex: &str, index: usize) -> Result<u8, DigestError> {
    match hex.as_bytes()[index] {
        c @ b'0'..=b'9' => Ok(c - b'0'),
        c @ b'a'..=b'f' => Ok(c - b'a' + 10),
        c @ b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(DigestError::InvalidCharacter {
            // Report the whole character, even when it is multi-byte.
            character: hex
                .get(index..)
                .and_then(|s| s.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        }),
    }
}
