//! The decoded flake record and the wire-form pipeline.
//!
//! Wire form is `<flakeType>_<digitStream>`. The digit stream is pure
//! lowercase hex and never contains an underscore, so the type and stream
//! split unambiguously at the last underscore even when the type itself
//! contains underscores.

use serde::{Deserialize, Serialize};

use crate::base::decode_base;
use crate::error::CoreError;
use crate::weave::unweave;

/// A decoded flake.
///
/// Decoding alone does not authenticate a flake; see
/// [`verify`](crate::verify::verify) for the signature check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flake {
    /// The type prefix of the wire form.
    pub flake_type: String,
    /// The embedded signature: a payload-length prefix of the keyed digest.
    pub sig: String,
    /// The hex base payload.
    pub data: String,
    /// Ancestor payloads, immediate parent first.
    pub ancestors: Vec<String>,
    /// Sequence number recovered from the payload.
    pub seq: u16,
    /// Absolute timestamp recovered from the payload, Unix milliseconds.
    pub timestamp_ms: i64,
}

impl Flake {
    /// Decode a wire-form flake without verifying its signature.
    ///
    /// `epoch_ms` is the reference instant embedded timestamps count from;
    /// it must match the epoch the flake was minted under.
    pub fn decode(flake: &str, epoch_ms: u64) -> Result<Self, CoreError> {
        let (flake_type, stream) = split_wire(flake);
        let (sig, data, ancestors) = unweave(stream)?;
        let (elapsed_ms, seq) = decode_base(&data)?;
        Ok(Self {
            flake_type: flake_type.to_owned(),
            sig,
            data,
            ancestors,
            seq,
            timestamp_ms: epoch_ms as i64 + elapsed_ms as i64,
        })
    }

    /// Number of ancestors in the embedded chain.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// The immediate parent's payload, if the flake has one.
    pub fn parent_data(&self) -> Option<&str> {
        self.ancestors.first().map(String::as_str)
    }
}

/// Split a flake into its type and digit stream at the last underscore.
///
/// A string without an underscore is all stream and an empty type.
pub(crate) fn split_wire(flake: &str) -> (&str, &str) {
    flake.rsplit_once('_').unwrap_or(("", flake))
}
