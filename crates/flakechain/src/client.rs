//! The issuing client: configuration, sequence counter, and chain
//! navigation.

use std::sync::Mutex;

use flakechain_core::{encode_base, sign, verify, CoreError, Flake, SigningKey, MAX_SEQUENCE};

use crate::error::{Error, Result};

/// Configuration for an issuing client.
///
/// The epoch and signing key must be shared by every party verifying the
/// same flakes; the node id must be unique per concurrently-issuing node.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deployment-assigned node id. Only the low 10 bits are used; larger
    /// ids are silently masked, so two nodes differing only above bit 9
    /// will mint colliding identifiers.
    pub node_id: u16,
    /// Reference instant embedded timestamps count from, Unix ms.
    pub epoch_ms: u64,
    /// Shared signing secret.
    pub signing_key: SigningKey,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            node_id: 1023,
            epoch_ms: 1_618_868_000_000,
            signing_key: SigningKey::default(),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the given signing key.
    pub fn with_signing_key(key: impl Into<SigningKey>) -> Self {
        Self {
            signing_key: key.into(),
            ..Self::default()
        }
    }

    /// Set the node id.
    pub fn node_id(mut self, node_id: u16) -> Self {
        self.node_id = node_id;
        self
    }

    /// Set the epoch.
    pub fn epoch_ms(mut self, epoch_ms: u64) -> Self {
        self.epoch_ms = epoch_ms;
        self
    }
}

/// A flake-issuing client for one node.
///
/// Owns the only piece of shared mutable state in the system, the
/// sequence counter. Everything else is pure computation, so a client can
/// be shared freely across threads.
pub struct Client {
    config: ClientConfig,
    seq: SequenceCounter,
}

impl Client {
    /// Create a client from its configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            seq: SequenceCounter::default(),
        }
    }

    /// Get the client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────
    // Issuance
    // ─────────────────────────────────────────────────────────────────────

    /// Issue a root flake with an empty ancestor chain.
    pub fn gen(&self, flake_type: &str) -> Result<String> {
        let data = self.next_base()?;
        let stream = sign(flake_type, &data, &[], &self.config.signing_key)?;
        tracing::debug!(flake_type, "issued root flake");
        Ok(format!("{flake_type}_{stream}"))
    }

    /// Issue a child whose chain extends the parent's by one level.
    pub fn gen_child(&self, flake_type: &str, parent_flake: &str) -> Result<String> {
        let parent = self.read(parent_flake)?;
        let mut chain = parent.ancestors;
        chain.insert(0, parent.data);

        let data = self.next_base()?;
        let stream = sign(flake_type, &data, &chain, &self.config.signing_key)?;
        tracing::debug!(flake_type, depth = chain.len(), "issued child flake");
        Ok(format!("{flake_type}_{stream}"))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Chain Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Reconstruct the immediate ancestor of a flake, byte for byte.
    ///
    /// Signing is deterministic in (type, payload, chain, key), so the
    /// result is exactly the string the ancestor was issued as. The
    /// ancestor's flake type is not recoverable from the chain; the caller
    /// supplies it.
    pub fn gen_parent(&self, flake: &str, parent_type: &str) -> Result<String> {
        let decoded = self.read(flake)?;
        let mut chain = decoded.ancestors;
        if chain.is_empty() {
            return Err(Error::EmptyChain(decoded.flake_type));
        }
        let data = chain.remove(0);
        let stream = sign(parent_type, &data, &chain, &self.config.signing_key)?;
        Ok(format!("{parent_type}_{stream}"))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Inspection
    // ─────────────────────────────────────────────────────────────────────

    /// Decode a flake without verifying its signature.
    pub fn read(&self, flake: &str) -> Result<Flake> {
        Ok(Flake::decode(flake, self.config.epoch_ms)?)
    }

    /// Decode a flake and check its signature against this client's key.
    ///
    /// On mismatch the error carries the decoded record, so a suspect
    /// flake can still be inspected.
    pub fn verify(&self, flake: &str) -> Result<Flake> {
        let verified = verify(flake, self.config.epoch_ms, &self.config.signing_key);
        if let Err(CoreError::SignatureMismatch { decoded }) = &verified {
            tracing::warn!(flake_type = %decoded.flake_type, "flake failed signature verification");
        }
        Ok(verified?)
    }

    /// Build a fresh base payload from the clock and the sequence counter.
    fn next_base(&self) -> Result<String> {
        let seq = self.seq.advance()?;
        let elapsed_ms = now_millis().saturating_sub(self.config.epoch_ms);
        Ok(encode_base(elapsed_ms, self.config.node_id, seq))
    }
}

/// The per-client issuance counter.
///
/// The lock is held only across the read-and-advance step, never across
/// digest computation or stream assembly. The counter resets to zero only
/// once it has moved past [`MAX_SEQUENCE`]: the value 4096 is issued
/// exactly once per wrap, widening that flake's sequence field.
#[derive(Debug, Default)]
struct SequenceCounter(Mutex<u16>);

impl SequenceCounter {
    /// Return the current value and advance.
    fn advance(&self) -> Result<u16> {
        let mut guard = self.0.lock().map_err(|_| Error::CounterPoisoned)?;
        let seq = *guard;
        if *guard > MAX_SEQUENCE {
            *guard = 0;
        } else {
            *guard += 1;
        }
        Ok(seq)
    }
}

/// Current Unix time in milliseconds.
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as u64
}
