//! # Flakechain Core
//!
//! Pure primitives for flake identifiers: base-value encoding, the
//! column-interleaved signing scheme, decoding, and verification.
//!
//! This crate contains no I/O, no clock, and no shared state. It is pure
//! computation over digit strings; issuance (clocks, sequence counters,
//! configuration) lives in the `flakechain` crate.
//!
//! ## Key Types
//!
//! - [`Flake`] - A decoded flake: payload, signature, ancestor chain
//! - [`SigningKey`] - The shared signing secret
//! - [`CoreError`] - Typed failures for malformed or tampered flakes
//!
//! ## Wire Format
//!
//! A flake is `<flakeType>_<digitStream>`, where the digit stream is pure
//! lowercase hex and never contains an underscore. See [`weave`] for the
//! interleaving that builds the stream and [`base`] for the payload layout.

pub mod base;
pub mod digest;
pub mod error;
pub mod flake;
pub mod verify;
pub mod weave;

pub use base::{decode_base, encode_base, MAX_SEQUENCE, NODE_ID_MASK};
pub use digest::{chain_digest, SigningKey, DIGEST_HEX_LEN};
pub use error::CoreError;
pub use flake::Flake;
pub use verify::verify;
pub use weave::{sign, MAX_CHAIN_DEPTH, MAX_GROUP_WIDTH};
