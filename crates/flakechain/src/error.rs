//! Error types for the issuing client.

use thiserror::Error;

use flakechain_core::CoreError;

/// Errors from client issuance and chain navigation.
#[derive(Debug, Error)]
pub enum Error {
    /// Decoding, signing, or verification failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The flake carries no ancestors, so no parent can be derived.
    #[error("flake of type {0:?} has no ancestor chain")]
    EmptyChain(String),

    /// The sequence counter lock was poisoned by a panicking thread.
    #[error("sequence counter poisoned")]
    CounterPoisoned,
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
