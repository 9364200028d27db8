//! # Flakechain Testkit
//!
//! Testing utilities for Flakechain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixture vectors**: lineages minted by sibling implementations, for
//!   cross-implementation verification
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: preconfigured clients for setting up test scenarios
//!
//! ## Fixture Vectors
//!
//! ```rust
//! use flakechain_testkit::vectors::{all_vectors, walk_vector};
//!
//! for vector in all_vectors() {
//!     assert!(walk_vector(&vector), "vector {} must reproduce", vector.name);
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use flakechain_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let lineage = fixture.chain(&["order", "shipment", "delivery"]).unwrap();
//! assert_eq!(lineage.len(), 3);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_node_fixtures, TestFixture};
pub use generators::{ancestor_chain, base_payload, flake_type, signing_key};
pub use vectors::{all_vectors, walk_vector, LineageVector};
