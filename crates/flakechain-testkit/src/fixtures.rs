//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use flakechain::{Client, ClientConfig, Result};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// A test fixture wrapping a preconfigured client.
pub struct TestFixture {
    pub client: Client,
}

impl TestFixture {
    /// Create a fixture with a random signing key.
    pub fn new() -> Self {
        Self::with_key(&random_key())
    }

    /// Create a fixture with a fixed signing key.
    pub fn with_key(key: &str) -> Self {
        Self {
            client: Client::new(ClientConfig::with_signing_key(key)),
        }
    }

    /// Issue a lineage: a root of the first type, then one child per
    /// remaining type. Returns the flakes root first.
    pub fn chain(&self, types: &[&str]) -> Result<Vec<String>> {
        let mut flakes: Vec<String> = Vec::with_capacity(types.len());
        for flake_type in types {
            let flake = match flakes.last() {
                None => self.client.gen(flake_type)?,
                Some(parent) => self.client.gen_child(flake_type, parent)?,
            };
            flakes.push(flake);
        }
        Ok(flakes)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixtures for `count` nodes sharing one signing key.
pub fn multi_node_fixtures(count: u16) -> Vec<TestFixture> {
    let key = random_key();
    (0..count)
        .map(|node_id| TestFixture {
            client: Client::new(ClientConfig::with_signing_key(key.as_str()).node_id(node_id)),
        })
        .collect()
}

fn random_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}
