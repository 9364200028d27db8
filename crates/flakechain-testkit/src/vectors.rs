//! Cross-implementation fixture vectors.
//!
//! Lineages minted by the sibling implementations of the flake wire
//! protocol. Walking a vector's nested flake back up must reproduce each
//! ancestor string exactly; any byte of divergence is a protocol break.

use flakechain::{Client, ClientConfig};
use serde::Serialize;

/// A lineage minted by a sibling implementation.
#[derive(Debug, Clone, Serialize)]
pub struct LineageVector {
    /// The implementation that minted the lineage.
    pub name: &'static str,
    /// Signing key the lineage was minted under.
    pub signing_key: &'static str,
    /// The deepest flake, carrying the whole chain.
    pub nested: &'static str,
    /// Flake type of the intermediate ancestor.
    pub child_type: &'static str,
    /// Expected intermediate ancestor flake.
    pub child: &'static str,
    /// Flake type of the root ancestor.
    pub parent_type: &'static str,
    /// Expected root ancestor flake.
    pub parent: &'static str,
}

/// Get all fixture vectors.
pub fn all_vectors() -> Vec<LineageVector> {
    vec![
        LineageVector {
            name: "javascript",
            signing_key: "test_signing_key",
            nested: "test_nested_child_c626af0f9a0ae7f704f4173764d48d4ce7732f4f6f7ff0a060f0f361",
            child_type: "test_child",
            child: "test_child_761cf03a0e7ff4fc7344ced40370f42f740a10fb26",
            parent_type: "test_parent",
            parent: "test_parent_c6df4ae7a44744cc438fef30c091",
        },
        LineageVector {
            name: "elixir",
            signing_key: "test_signing_key",
            nested: "test_nested_child_e5152f0f6b0b9efe67f7ee7e449419459be71f7fcfefc0b000f0d250",
            child_type: "test_child",
            child: "test_child_e50ef02b07eff7f6e7b4539417e6f7afeb0b00fb15",
            parent_type: "test_parent",
            parent: "test_parent_254fbb1e371e544567cf9f307040",
        },
    ]
}

/// Walk a vector's nested flake up its lineage, checking each
/// reconstruction against the expected string.
pub fn walk_vector(vector: &LineageVector) -> bool {
    let client = Client::new(ClientConfig::with_signing_key(vector.signing_key));

    let child = match client.gen_parent(vector.nested, vector.child_type) {
        Ok(flake) => flake,
        Err(_) => return false,
    };
    if child != vector.child {
        return false;
    }

    match client.gen_parent(&child, vector.parent_type) {
        Ok(parent) => parent == vector.parent,
        Err(_) => false,
    }
}
