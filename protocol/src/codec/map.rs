//! Size-prefixed encoding of an ordered key → value mapping.
//!
//! The wire format for a mapping is:
//!
//! ```text
//! count ++ key_0 ++ value_0 ++ key_1 ++ value_1 ++ ...
//! ```
//!
//! with entries in ascending key order. The encoded bytes get hashed, so the
//! order is consensus-critical: a reimplementation that emits insertion order
//! produces a different transaction hash for the same logical content.
//! `BTreeMap` iteration is ascending by `Ord`, which for the numeric index
//! newtypes used as keys here is exactly ascending numeric order — the sort
//! is structural, not incidental.

use std::collections::BTreeMap;

use super::uint::{encode_uint, Width};
use super::CodecError;

/// Encode a map as `count ++ (key ++ value)*` in ascending key order,
/// appending the bytes to `out`.
///
/// The entry count is written at `count_width` via the fixed-width encoder;
/// a map with more entries than the prefix can carry fails with
/// [`CodecError::CountOverflow`]. Key and value encoding is delegated to the
/// supplied closures, so key-width violations surface as whatever the key
/// encoder returns (in practice [`CodecError::OutOfRange`]).
///
/// An empty map encodes validly as just the zero count. Non-emptiness is not
/// this function's invariant — the signature block encoder owns that rule and
/// enforces it before calling here.
pub fn encode_map<K, V, EK, EV>(
    map: &BTreeMap<K, V>,
    count_width: Width,
    out: &mut Vec<u8>,
    mut encode_key: EK,
    mut encode_value: EV,
) -> Result<(), CodecError>
where
    EK: FnMut(&K, &mut Vec<u8>) -> Result<(), CodecError>,
    EV: FnMut(&V, &mut Vec<u8>) -> Result<(), CodecError>,
{
    encode_uint(count_width, map.len() as u64, out).map_err(|_| CodecError::CountOverflow {
        bits: count_width.bits(),
        len: map.len(),
    })?;

    for (key, value) in map {
        encode_key(key, out)?;
        encode_value(value, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_key(k: &u8, out: &mut Vec<u8>) -> Result<(), CodecError> {
        encode_uint(Width::U8, *k as u64, out)
    }

    fn byte_value(v: &u8, out: &mut Vec<u8>) -> Result<(), CodecError> {
        encode_uint(Width::U8, *v as u64, out)
    }

    #[test]
    fn empty_map_is_just_the_count() {
        let map: BTreeMap<u8, u8> = BTreeMap::new();
        let mut out = Vec::new();
        encode_map(&map, Width::U8, &mut out, byte_key, byte_value).unwrap();
        assert_eq!(out, [0x00]);
    }

    #[test]
    fn entries_come_out_in_ascending_key_order() {
        // Inserted out of order on purpose.
        let mut map = BTreeMap::new();
        map.insert(2u8, 0x22u8);
        map.insert(0u8, 0x00u8);
        map.insert(1u8, 0x11u8);

        let mut out = Vec::new();
        encode_map(&map, Width::U8, &mut out, byte_key, byte_value).unwrap();
        assert_eq!(out, [0x03, 0x00, 0x00, 0x01, 0x11, 0x02, 0x22]);
    }

    #[test]
    fn count_respects_declared_width() {
        let mut map = BTreeMap::new();
        map.insert(7u8, 9u8);
        let mut out = Vec::new();
        encode_map(&map, Width::U16, &mut out, byte_key, byte_value).unwrap();
        assert_eq!(out, [0x00, 0x01, 0x07, 0x09]);
    }

    #[test]
    fn oversized_map_fails_with_count_overflow() {
        let map: BTreeMap<u16, u8> = (0..300u16).map(|k| (k, 0)).collect();
        let mut out = Vec::new();
        let err = encode_map(
            &map,
            Width::U8,
            &mut out,
            |k, out| encode_uint(Width::U16, *k as u64, out),
            byte_value,
        )
        .unwrap_err();
        assert_eq!(err, CodecError::CountOverflow { bits: 8, len: 300 });
    }

    #[test]
    fn key_encoder_failure_propagates() {
        let mut map = BTreeMap::new();
        map.insert(300u16, 0u8);
        let mut out = Vec::new();
        let err = encode_map(
            &map,
            Width::U8,
            &mut out,
            |k, out| encode_uint(Width::U8, *k as u64, out),
            byte_value,
        )
        .unwrap_err();
        assert_eq!(err, CodecError::OutOfRange { bits: 8, value: 300 });
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut a = BTreeMap::new();
        let mut b = BTreeMap::new();
        for k in [5u8, 1, 9, 3] {
            a.insert(k, k.wrapping_mul(2));
        }
        for k in [9u8, 3, 5, 1] {
            b.insert(k, k.wrapping_mul(2));
        }

        let mut out_a = Vec::new();
        let mut out_b = Vec::new();
        encode_map(&a, Width::U8, &mut out_a, byte_key, byte_value).unwrap();
        encode_map(&b, Width::U8, &mut out_b, byte_key, byte_value).unwrap();
        assert_eq!(out_a, out_b, "insertion order must not leak into bytes");
    }
}
