//! Column interleaving: the signing-side weave and its inverse.
//!
//! A signed digit stream is built column-wise. For every character position
//! of the payload, one digit of the keyed digest, one digit of the payload,
//! and one digit of every ancestor are emitted, in that order. Reading the
//! stream back distributes its characters round-robin into a slot count
//! derived from [`MAX_GROUP_WIDTH`], never from the content itself.

use crate::digest::{chain_digest, SigningKey, DIGEST_HEX_LEN};
use crate::error::CoreError;

/// Digits emitted per payload position at the maximum ancestor depth:
/// one for the signature, one for the payload, one per ancestor.
///
/// The decoder divides the stream length by this constant to recover the
/// slot count. The constant is part of the wire protocol; [`sign`] refuses
/// any layout it cannot split back into the same slots.
pub const MAX_GROUP_WIDTH: usize = 14;

/// Nominal maximum number of ancestors a flake can carry.
pub const MAX_CHAIN_DEPTH: usize = MAX_GROUP_WIDTH - 2;

/// Sign a payload and its ancestor chain into a digit stream.
///
/// Every ancestor must be at least as long as the payload, and the payload
/// must fit inside the digest; otherwise a typed error is returned rather
/// than truncating. The output is the bare digit stream; the wire form
/// prepends `<flakeType>_`.
pub fn sign(
    flake_type: &str,
    data: &str,
    ancestors: &[String],
    key: &SigningKey,
) -> Result<String, CoreError> {
    if data.len() > DIGEST_HEX_LEN {
        return Err(CoreError::PayloadTooLong(data.len()));
    }
    for (index, ancestor) in ancestors.iter().enumerate() {
        if ancestor.len() < data.len() {
            return Err(CoreError::AncestorTooShort {
                index,
                got: ancestor.len(),
                need: data.len(),
            });
        }
    }
    let group = 2 + ancestors.len();
    if data.len() * group / MAX_GROUP_WIDTH != group {
        return Err(CoreError::UndecodableLayout {
            digits: data.len(),
            group,
        });
    }

    let mut chain = ancestors.to_vec();
    scramble(&mut chain);
    let digest = chain_digest(flake_type, data, &chain, key);

    let digest = digest.as_bytes();
    let columns: Vec<&[u8]> = chain.iter().map(|a| a.as_bytes()).collect();
    let mut stream = String::with_capacity(data.len() * group);
    for (i, &byte) in data.as_bytes().iter().enumerate() {
        stream.push(digest[i] as char);
        stream.push(byte as char);
        for column in &columns {
            stream.push(column[i] as char);
        }
    }
    Ok(stream)
}

/// Split a digit stream back into signature, payload, and ancestor chain.
pub(crate) fn unweave(stream: &str) -> Result<(String, String, Vec<String>), CoreError> {
    if !is_lower_hex(stream) {
        return Err(CoreError::NonHexStream);
    }
    let slot_count = stream.len() / MAX_GROUP_WIDTH;
    if slot_count < 2 {
        return Err(CoreError::StreamTooShort(stream.len()));
    }
    if stream.len() % slot_count != 0 {
        return Err(CoreError::UnevenStream {
            len: stream.len(),
            slots: slot_count,
        });
    }

    let mut slots = vec![String::with_capacity(stream.len() / slot_count); slot_count];
    for (idx, ch) in stream.chars().enumerate() {
        slots[idx % slot_count].push(ch);
    }

    let mut slots = slots.into_iter();
    let sig = slots.next().unwrap_or_default();
    let data = slots.next().unwrap_or_default();
    let mut ancestors: Vec<String> = slots.collect();
    scramble(&mut ancestors);
    Ok((sig, data, ancestors))
}

/// Reverse every even-indexed ancestor in place.
///
/// The transform is its own inverse; decoding applies it again to restore
/// the original chain. It is an obfuscation step, not a security
/// mechanism.
pub(crate) fn scramble(ancestors: &mut [String]) {
    for (index, ancestor) in ancestors.iter_mut().enumerate() {
        if index % 2 == 0 {
            *ancestor = ancestor.chars().rev().collect();
        }
    }
}

/// Whether `s` is non-empty and entirely lowercase hex digits.
pub(crate) fn is_lower_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
