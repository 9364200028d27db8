//! # Flakechain
//!
//! Opaque, time-ordered, tamper-evident identifiers ("flakes") that carry
//! a verifiable chain of ancestor identifiers. A descendant flake alone is
//! enough to reconstruct and verify every identifier in its lineage, with
//! no backing store involved.
//!
//! ## Overview
//!
//! - **Flake**: an immutable string `<flakeType>_<digitStream>`. The digit
//!   stream interleaves a keyed digest, a time-ordered base payload, and
//!   the payloads of every ancestor.
//! - **Client**: issues flakes for one node. Holds the node id, the shared
//!   epoch and signing key, and the only mutable state in the system: a
//!   lock-guarded sequence counter.
//! - **Chain navigation**: `gen_child` deepens a lineage by one level;
//!   `gen_parent` rebuilds an ancestor flake byte for byte from any
//!   descendant.
//!
//! ## Usage
//!
//! ```rust
//! use flakechain::{Client, ClientConfig};
//!
//! let client = Client::new(ClientConfig::with_signing_key("shared-secret"));
//!
//! let order = client.gen("order")?;
//! let shipment = client.gen_child("shipment", &order)?;
//!
//! // A holder of `shipment` can rebuild `order` byte for byte.
//! assert_eq!(client.gen_parent(&shipment, "order")?, order);
//! # Ok::<(), flakechain::Error>(())
//! ```

pub mod client;
pub mod error;

pub use client::{Client, ClientConfig};
pub use error::{Error, Result};

// Re-export commonly used core types
pub use flakechain_core::{CoreError, Flake, SigningKey, MAX_CHAIN_DEPTH, MAX_SEQUENCE};
