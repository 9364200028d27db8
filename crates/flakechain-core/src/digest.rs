//! The keyed digest woven into every signed flake.

use sha2::{Digest, Sha256};
use std::fmt;

/// Hex digits in a rendered chain digest (SHA-256).
pub const DIGEST_HEX_LEN: usize = 64;

/// The shared signing secret.
///
/// An opaque string known to every party that mints or verifies flakes.
/// It is never embedded in a flake or otherwise transmitted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SigningKey(String);

impl SigningKey {
    /// Wrap a secret.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Whether the key is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey(..)")
    }
}

impl From<&str> for SigningKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for SigningKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Compute the keyed digest for a flake.
///
/// The preimage order is fixed by the wire protocol: payload, each ancestor
/// payload in chain order, the signing key, the flake type. The result is
/// 64 lowercase hex digits; only a payload-length prefix of it ever reaches
/// the wire.
pub fn chain_digest(flake_type: &str, data: &str, ancestors: &[String], key: &SigningKey) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    for ancestor in ancestors {
        hasher.update(ancestor.as_bytes());
    }
    hasher.update(key.as_bytes());
    hasher.update(flake_type.as_bytes());
    hex::encode(hasher.finalize())
}
