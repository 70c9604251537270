//! SHA-512 digests for synchronization checks
//!
//! This crate computes SHA-512 digests of in-memory messages and moves
//! them between their binary and textual forms. Digests are used to
//! compare content across peers, so every build must produce bit-exact
//! FIPS 180-4 output; a built-in known-answer self-test lets the host
//! verify that before trusting any digest.
//!
//! # Module overview
//!
//! - `hash::sha512`
//!   Constant tables, message padding, the compression function, the
//!   raw/hex digest codec and the self-test. Everything is a pure function
//!   over its arguments; independent messages can be hashed on as many
//!   threads as the caller likes.
//!
//! # Features
//!
//! - `speed`: fully unrolled round loop
//! - `tracing`: structured log events from the self-test and batch paths
//!   (on by default)
//! - `parallel`: `calc_digests`, hashing many messages on the rayon pool
//!
//! # Example
//!
//! ```
//! use syncsum::hash::sha512::{calc_digest, dump_digest, read_digest, unit_test_default};
//!
//! assert!(unit_test_default());
//!
//! let digest = calc_digest(b"abc");
//! let hex = dump_digest(&digest);
//! assert!(hex.starts_with("ddaf35a193617aba"));
//! assert_eq!(read_digest(&hex).unwrap(), digest);
//! ```
//!
//! # Non-goals
//!
//! No keyed hashing (HMAC), no incremental hasher object and no other
//! hash families. Callers that must feed a message in pieces can drive
//! `dm_compress` and `padding::split` directly.

mod trace;

pub mod hash;
