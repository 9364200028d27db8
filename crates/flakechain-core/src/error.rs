//! Error types for flake encoding, decoding, and verification.

use thiserror::Error;

use crate::flake::Flake;

/// Errors from the pure flake primitives.
///
/// Decoding and verification never panic on adversarial input; every
/// malformed stream maps to one of these variants.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The recomputed digest does not start with the embedded signature.
    ///
    /// Carries the decoded record so callers can still inspect the
    /// suspect flake.
    #[error("signature verification failed")]
    SignatureMismatch { decoded: Box<Flake> },

    /// The digit stream contains characters outside lowercase hex.
    #[error("digit stream is not lowercase hex")]
    NonHexStream,

    /// The digit stream cannot hold both a signature and a payload slot.
    #[error("digit stream of {0} digits is too short to hold a signature and payload")]
    StreamTooShort(usize),

    /// The digit stream does not divide evenly into its recovered slots.
    #[error("digit stream length {len} is not a multiple of its {slots} slots")]
    UnevenStream { len: usize, slots: usize },

    /// The payload is longer than the digest that has to cover it.
    #[error("payload of {0} digits exceeds the 64-digit digest")]
    PayloadTooLong(usize),

    /// An ancestor payload is shorter than the payload it is woven with.
    #[error("ancestor {index} has {got} digits, fewer than the {need}-digit payload")]
    AncestorTooShort { index: usize, got: usize, need: usize },

    /// The payload width and group width produce a stream the fixed-width
    /// decoder cannot split back into the same slots.
    #[error("{group} digits per position over a {digits}-digit payload cannot be decoded")]
    UndecodableLayout { digits: usize, group: usize },

    /// The sequence field recovered from a base value is wider than 16 bits.
    #[error("sequence field of {bits} bits overflows the sequence counter")]
    SequenceOverflow { bits: u32 },
}
