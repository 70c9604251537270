use syncsum::hash::sha512::{
    DigestError, HEX_LEN, HexDigest, NULL_HEX_DIGEST, NULL_RAW_DIGEST, RawDigest, TEST_STR_PAIR,
    calc_digest, dump_digest, dump_digest_into, read_digest, read_hex_digest,
};

const ABC_HEX: &str = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                       2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";

fn sample_raw() -> RawDigest {
    let mut bytes = [0u8; 64];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(37) ^ 0xa5;
    }
    RawDigest::from(bytes)
}

// -------------------------------------------------------
// 1. ENCODING
// -------------------------------------------------------

#[test]
fn dump_known_digest() {
    assert_eq!(dump_digest(&calc_digest(b"abc")), ABC_HEX);
}

#[test]
fn dump_is_lowercase_128_chars() {
    let hex = dump_digest(&RawDigest::from([0xABu8; 64]));
    assert_eq!(hex.len(), HEX_LEN);
    assert_eq!(hex, "ab".repeat(64));
}

#[test]
fn dump_into_fixed_buffer_is_nul_terminated() {
    let raw = sample_raw();
    let mut fixed = HexDigest::default();
    dump_digest_into(&raw, &mut fixed);

    let bytes = fixed.as_bytes_with_nul();
    assert_eq!(bytes.len(), HEX_LEN + 1);
    assert_eq!(bytes[HEX_LEN], 0);
    assert_eq!(fixed.as_str(), dump_digest(&raw));
}

#[test]
fn fixed_form_as_str_is_lowercase_hex() {
    let msgs: [&[u8]; 3] = [b"", b"abc", &[0xffu8; 300]];
    for msg in msgs {
        let fixed = calc_digest(msg).to_hex();
        let text = fixed.as_str();
        assert_eq!(text.len(), HEX_LEN);
        assert!(text.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
        assert_eq!(text.as_bytes(), &fixed.as_bytes_with_nul()[..HEX_LEN]);
    }
}

#[test]
fn fixed_and_owned_forms_agree() {
    let raw = calc_digest(b"sync");
    assert_eq!(raw.to_hex().to_string(), dump_digest(&raw));
    assert_eq!(raw.to_string(), dump_digest(&raw));
}

#[test]
fn dump_matches_hex_crate() {
    let raw = sample_raw();
    assert_eq!(dump_digest(&raw), hex::encode(raw.as_bytes()));
}

// -------------------------------------------------------
// 2. DECODING
// -------------------------------------------------------

#[test]
fn read_known_digest() {
    assert_eq!(read_digest(ABC_HEX).unwrap(), calc_digest(b"abc"));
}

#[test]
fn read_accepts_uppercase() {
    let upper = ABC_HEX.to_ascii_uppercase();
    let raw = read_digest(&upper).unwrap();
    assert_eq!(dump_digest(&raw), ABC_HEX);
}

#[test]
fn read_matches_hex_crate() {
    let raw = read_digest(TEST_STR_PAIR[1]).unwrap();
    assert_eq!(raw.as_bytes().to_vec(), hex::decode(TEST_STR_PAIR[1]).unwrap());
}

#[test]
fn read_hex_digest_fixed_form() {
    let raw = sample_raw();
    assert_eq!(read_hex_digest(&raw.to_hex()).unwrap(), raw);
}

#[test]
fn round_trip_raw_and_hex() {
    let raw = sample_raw();
    assert_eq!(read_digest(&dump_digest(&raw)).unwrap(), raw);
    assert_eq!(dump_digest(&read_digest(ABC_HEX).unwrap()), ABC_HEX);
}

// -------------------------------------------------------
// 3. MALFORMED INPUT
// -------------------------------------------------------

#[test]
fn read_rejects_127_chars() {
    let short = &ABC_HEX[..127];
    assert_eq!(
        read_digest(short),
        Err(DigestError::InvalidLength { len: 127 })
    );
}

#[test]
fn read_rejects_129_chars() {
    let long = format!("{ABC_HEX}0");
    assert_eq!(
        read_digest(&long),
        Err(DigestError::InvalidLength { len: 129 })
    );
}

#[test]
fn read_rejects_empty() {
    assert_eq!(read_digest(""), Err(DigestError::InvalidLength { len: 0 }));
}

#[test]
fn read_rejects_non_hex_char() {
    let mut bad = ABC_HEX.to_owned();
    bad.replace_range(40..41, "g");
    assert_eq!(
        read_digest(&bad),
        Err(DigestError::InvalidCharacter {
            character: 'g',
            index: 40
        })
    );
}

#[test]
fn read_reports_first_bad_char() {
    let bad = format!("{}xz", &ABC_HEX[..126]);
    assert_eq!(
        read_digest(&bad),
        Err(DigestError::InvalidCharacter {
            character: 'x',
            index: 126
        })
    );
}

#[test]
fn read_rejects_multibyte_char() {
    // 126 ASCII bytes plus a two-byte char: 128 bytes total.
    let bad = format!("{}é", &ABC_HEX[..126]);
    assert_eq!(bad.len(), HEX_LEN);
    assert_eq!(
        read_digest(&bad),
        Err(DigestError::InvalidCharacter {
            character: 'é',
            index: 126
        })
    );
}

#[test]
fn read_rejects_whitespace_and_prefix() {
    let spaced = format!(" {}", &ABC_HEX[..127]);
    assert!(read_digest(&spaced).is_err());

    let prefixed = format!("0x{}", &ABC_HEX[..126]);
    assert!(read_digest(&prefixed).is_err());
}

#[test]
fn error_messages() {
    assert_eq!(
        DigestError::InvalidLength { len: 3 }.to_string(),
        "hex digest must be 128 characters long, got 3"
    );
    assert_eq!(
        DigestError::InvalidCharacter {
            character: 'g',
            index: 5
        }
        .to_string(),
        "invalid hex character 'g' at index 5"
    );
}

// -------------------------------------------------------
// 4. NULL DIGESTS AND PARSING TRAITS
// -------------------------------------------------------

#[test]
fn null_digests() {
    assert!(NULL_RAW_DIGEST.is_null());
    assert!(NULL_HEX_DIGEST.is_null());
    assert_eq!(NULL_RAW_DIGEST, RawDigest::default());
    assert_eq!(NULL_HEX_DIGEST.as_str(), "0".repeat(HEX_LEN));
    assert_eq!(NULL_HEX_DIGEST.as_bytes_with_nul()[HEX_LEN], 0);
    assert_eq!(NULL_RAW_DIGEST.to_hex(), NULL_HEX_DIGEST);
    assert_eq!(read_hex_digest(&NULL_HEX_DIGEST).unwrap(), NULL_RAW_DIGEST);
}

#[test]
fn from_str_normalizes_case() {
    let hex: HexDigest = ABC_HEX.to_ascii_uppercase().parse().unwrap();
    assert_eq!(hex.as_str(), ABC_HEX);

    let raw: RawDigest = ABC_HEX.parse().unwrap();
    assert_eq!(raw, calc_digest(b"abc"));

    assert!("nope".parse::<HexDigest>().is_err());
}

#[test]
fn debug_shows_hex() {
    let raw = calc_digest(b"abc");
    assert_eq!(format!("{raw:?}"), format!("RawDigest({ABC_HEX})"));
}
