//! Base values: the time-ordered integer behind every flake payload.
//!
//! A base value packs three fields, most significant first:
//!
//! ```text
//! | elapsed ms since epoch (48 bits) | node id (10 bits) | sequence (12 bits) |
//! ```
//!
//! and renders as lowercase hex without a fixed width. Field widths are
//! minimums, matching the binary-string concatenation used by the sibling
//! implementations: the node id is masked to 10 bits, while the sequence
//! field widens to 13 bits for the single issuance that carries the
//! wraparound value 4096.

use crate::error::CoreError;
use crate::weave::is_lower_hex;

/// Bits of elapsed milliseconds in a base value.
pub const TIMESTAMP_BITS: u32 = 48;
/// Bits of node id in a base value.
pub const NODE_ID_BITS: u32 = 10;
/// Nominal bits of sequence in a base value.
pub const SEQUENCE_BITS: u32 = 12;
/// Nominal total width of a base value.
pub const BASE_BITS: u32 = TIMESTAMP_BITS + NODE_ID_BITS + SEQUENCE_BITS;

/// Mask applied to node ids. Larger ids are silently truncated, so two
/// nodes differing only above bit 9 will mint colliding base values.
pub const NODE_ID_MASK: u16 = (1 << NODE_ID_BITS) - 1;

/// Largest sequence value that fits the nominal 12-bit field.
pub const MAX_SEQUENCE: u16 = (1 << SEQUENCE_BITS) - 1;

/// Pack elapsed time, node id, and sequence into a hex payload.
///
/// Pure function of its inputs; the clock and the sequence counter live
/// with the issuing client.
pub fn encode_base(elapsed_ms: u64, node_id: u16, seq: u16) -> String {
    let seq_bits = seq_field_width(seq);
    let value = ((elapsed_ms as u128) << (NODE_ID_BITS + seq_bits))
        | (((node_id & NODE_ID_MASK) as u128) << seq_bits)
        | seq as u128;
    format!("{value:x}")
}

/// Recover elapsed milliseconds and sequence from a hex payload.
///
/// The payload is read as a binary string zero-padded to at least
/// [`BASE_BITS`]: the first 48 bits are elapsed time, the last bits past
/// position 58 are the sequence. The node id field is parsed over but not
/// returned.
pub fn decode_base(data: &str) -> Result<(u64, u16), CoreError> {
    if !is_lower_hex(data) {
        return Err(CoreError::NonHexStream);
    }
    // A payload too wide for u128 has an oversized sequence field as well.
    let value = u128::from_str_radix(data, 16).map_err(|_| CoreError::SequenceOverflow {
        bits: data.len() as u32 * 4 - TIMESTAMP_BITS - NODE_ID_BITS,
    })?;
    let width = (128 - value.leading_zeros()).max(BASE_BITS);
    let seq_bits = width - TIMESTAMP_BITS - NODE_ID_BITS;
    if seq_bits > u16::BITS {
        return Err(CoreError::SequenceOverflow { bits: seq_bits });
    }
    let elapsed_ms = (value >> (width - TIMESTAMP_BITS)) as u64;
    let seq = (value & ((1u128 << seq_bits) - 1)) as u16;
    Ok((elapsed_ms, seq))
}

/// Width of the sequence field: at least 12 bits, wider when the counter
/// wrap issues 4096.
fn seq_field_width(seq: u16) -> u32 {
    SEQUENCE_BITS.max(u16::BITS - seq.leading_zeros())
}
