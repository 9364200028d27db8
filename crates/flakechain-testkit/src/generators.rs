//! Proptest generators for property-based testing.

use proptest::prelude::*;

use flakechain_core::{encode_base, SigningKey, MAX_CHAIN_DEPTH, MAX_SEQUENCE, NODE_ID_MASK};

/// Generate a flake type, possibly containing underscores.
pub fn flake_type() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,20}".prop_map(String::from)
}

/// Generate a node id within the 10-bit range.
pub fn node_id() -> impl Strategy<Value = u16> {
    0u16..=NODE_ID_MASK
}

/// Generate a nominal sequence value.
pub fn sequence() -> impl Strategy<Value = u16> {
    0u16..=MAX_SEQUENCE
}

/// Elapsed milliseconds that render to a 14-digit base payload.
///
/// Payloads of this width weave into streams the fixed-width decoder can
/// split at any chain depth, which makes them the right raw material for
/// deep-chain properties.
pub fn short_elapsed() -> impl Strategy<Value = u64> {
    (1u64 << 33)..(1u64 << 34)
}

/// Generate a 14-digit base payload.
pub fn base_payload() -> impl Strategy<Value = String> {
    (short_elapsed(), node_id(), sequence()).prop_map(|(elapsed, node, seq)| {
        encode_base(elapsed, node, seq)
    })
}

/// Generate an ancestor chain of 14-digit payloads.
pub fn ancestor_chain(max_depth: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(base_payload(), 0..=max_depth)
}

/// Generate an opaque signing key.
pub fn signing_key() -> impl Strategy<Value = SigningKey> {
    "[ -~]{0,32}".prop_map(SigningKey::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flakechain_core::{sign, verify, CoreError, Flake};

    proptest! {
        #[test]
        fn test_decode_inverts_sign(
            t in flake_type(),
            data in base_payload(),
            chain in ancestor_chain(MAX_CHAIN_DEPTH),
            key in signing_key(),
        ) {
            let stream = sign(&t, &data, &chain, &key).unwrap();
            let flake = format!("{t}_{stream}");

            let decoded = Flake::decode(&flake, 0).unwrap();
            prop_assert_eq!(decoded.flake_type, t);
            prop_assert_eq!(decoded.data, data);
            prop_assert_eq!(decoded.ancestors, chain);
        }

        #[test]
        fn test_root_flakes_verify(
            t in flake_type(),
            data in base_payload(),
            key in signing_key(),
        ) {
            let stream = sign(&t, &data, &[], &key).unwrap();
            let flake = format!("{t}_{stream}");

            let decoded = verify(&flake, 0, &key).unwrap();
            prop_assert_eq!(decoded.flake_type, t);
            prop_assert_eq!(decoded.sig.len(), decoded.data.len());
        }

        #[test]
        fn test_root_flakes_fail_under_other_key(
            t in flake_type(),
            data in base_payload(),
        ) {
            let stream = sign(&t, &data, &[], &SigningKey::new("one key")).unwrap();
            let flake = format!("{t}_{stream}");

            let result = verify(&flake, 0, &SigningKey::new("another key"));
            prop_assert!(
                matches!(result, Err(CoreError::SignatureMismatch { .. })),
                "expected SignatureMismatch"
            );
        }

        #[test]
        fn test_lineage_walks_back_up(
            types in prop::collection::vec(flake_type(), 2..5),
            key in "[a-zA-Z0-9]{8,24}",
        ) {
            let fixture = crate::fixtures::TestFixture::with_key(&key);
            let types: Vec<&str> = types.iter().map(String::as_str).collect();
            let lineage = fixture.chain(&types).unwrap();

            for index in (1..lineage.len()).rev() {
                let rebuilt = fixture
                    .client
                    .gen_parent(&lineage[index], types[index - 1])
                    .unwrap();
                prop_assert_eq!(&rebuilt, &lineage[index - 1]);
            }
        }
    }
}
