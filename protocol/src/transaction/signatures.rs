//! The two-level signature block.
//!
//! A MERIDIAN account can hold several credentials, each with several keys,
//! and a transaction carries one signature per (credential, key) pair that
//! signed it. On the wire this is two nested ordered maps:
//!
//! ```text
//! count (u8)
//!   credential index (u8)
//!   count (u8)
//!     key index (u8)
//!     signature length (u16) ++ signature bytes
//! ```
//!
//! Both levels encode in ascending index order. The encoded block is part of
//! the hashed bytes, so the order is consensus-critical — which is why the
//! container is a `BTreeMap` and not whatever iteration order a hash map
//! felt like today.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::{encode_map, encode_uint, Width};
use crate::transaction::error::EncodeError;
use crate::transaction::types::{CredentialIndex, KeyIndex, Signature};

/// The signatures attached to an account transaction, keyed by credential
/// index, then key index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSignature {
    /// credential index → key index → signature bytes.
    pub signatures: BTreeMap<CredentialIndex, BTreeMap<KeyIndex, Signature>>,
}

impl TransactionSignature {
    /// An empty signature set. Not encodable until at least one signature
    /// is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The common single-signer case: one signature at credential 0, key 0.
    pub fn single(signature: Signature) -> Self {
        let mut sigs = Self::new();
        sigs.insert(CredentialIndex(0), KeyIndex(0), signature);
        sigs
    }

    /// Adds or replaces the signature at `(credential, key)`.
    pub fn insert(&mut self, credential: CredentialIndex, key: KeyIndex, signature: Signature) {
        self.signatures
            .entry(credential)
            .or_default()
            .insert(key, signature);
    }

    /// Total number of signatures across all credentials. This is the
    /// signature count the energy cost model prices against.
    pub fn signature_count(&self) -> u32 {
        self.signatures.values().map(|keys| keys.len() as u32).sum()
    }

    /// True when no credential carries any signature.
    pub fn is_empty(&self) -> bool {
        self.signature_count() == 0
    }
}

/// Encode the signature block into `out`.
///
/// Fails with [`EncodeError::EmptySignatureSet`] when the set has no
/// credential entries or any credential entry holds zero signatures — a
/// transaction must carry at least one signature to be encodable, and that
/// rule lives here, not in the generic map encoder (which happily encodes
/// empty maps for callers that allow them).
///
/// Each signature value is written as `u16 length ++ bytes`; the explicit
/// prefix exists because signature length varies per scheme, so it cannot be
/// implied by the outer structure. A signature longer than `u16::MAX` bytes
/// fails with the codec's range error.
pub fn encode_signatures(
    sigs: &TransactionSignature,
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    if sigs.signatures.is_empty() || sigs.signatures.values().any(BTreeMap::is_empty) {
        return Err(EncodeError::EmptySignatureSet);
    }

    encode_map(
        &sigs.signatures,
        Width::U8,
        out,
        |credential, out| encode_uint(Width::U8, credential.0 as u64, out),
        |keys, out| {
            encode_map(
                keys,
                Width::U8,
                out,
                |key, out| encode_uint(Width::U8, key.0 as u64, out),
                |sig, out| {
                    encode_uint(Width::U16, sig.len() as u64, out)?;
                    out.extend_from_slice(sig.as_bytes());
                    Ok(())
                },
            )
        },
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_rejected() {
        let mut out = Vec::new();
        let err = encode_signatures(&TransactionSignature::new(), &mut out).unwrap_err();
        assert_eq!(err, EncodeError::EmptySignatureSet);
        assert!(out.is_empty(), "no partial bytes on failure");
    }

    #[test]
    fn credential_without_signatures_is_rejected() {
        let mut sigs = TransactionSignature::new();
        sigs.signatures.insert(CredentialIndex(0), BTreeMap::new());

        let mut out = Vec::new();
        assert_eq!(
            encode_signatures(&sigs, &mut out).unwrap_err(),
            EncodeError::EmptySignatureSet
        );
    }

    #[test]
    fn single_signature_block_layout() {
        let sigs = TransactionSignature::single(Signature::new(vec![0xAA]));
        let mut out = Vec::new();
        encode_signatures(&sigs, &mut out).unwrap();
        // 1 credential, index 0; 1 key, index 0; length 1; byte AA.
        assert_eq!(out, [0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0xAA]);
    }

    #[test]
    fn credentials_encode_in_ascending_order() {
        // Inserted 2, 0, 1 — the wire must still say 0, 1, 2.
        let mut sigs = TransactionSignature::new();
        sigs.insert(CredentialIndex(2), KeyIndex(0), Signature::new(vec![0x22]));
        sigs.insert(CredentialIndex(0), KeyIndex(0), Signature::new(vec![0x00]));
        sigs.insert(CredentialIndex(1), KeyIndex(0), Signature::new(vec![0x11]));

        let mut out = Vec::new();
        encode_signatures(&sigs, &mut out).unwrap();
        assert_eq!(
            out,
            [
                0x03, // 3 credentials
                0x00, 0x01, 0x00, 0x00, 0x01, 0x00, // credential 0
                0x01, 0x01, 0x00, 0x00, 0x01, 0x11, // credential 1
                0x02, 0x01, 0x00, 0x00, 0x01, 0x22, // credential 2
            ]
        );
    }

    #[test]
    fn key_indices_encode_in_ascending_order() {
        let mut sigs = TransactionSignature::new();
        sigs.insert(CredentialIndex(0), KeyIndex(3), Signature::new(vec![0x33]));
        sigs.insert(CredentialIndex(0), KeyIndex(1), Signature::new(vec![0x11]));

        let mut out = Vec::new();
        encode_signatures(&sigs, &mut out).unwrap();
        assert_eq!(
            out,
            [
                0x01, // 1 credential
                0x00, 0x02, // credential 0, 2 keys
                0x01, 0x00, 0x01, 0x11, // key 1
                0x03, 0x00, 0x01, 0x33, // key 3
            ]
        );
    }

    #[test]
    fn variable_length_signatures_carry_their_own_prefix() {
        let mut sigs = TransactionSignature::new();
        sigs.insert(
            CredentialIndex(0),
            KeyIndex(0),
            Signature::from([0x55u8; 64]),
        );

        let mut out = Vec::new();
        encode_signatures(&sigs, &mut out).unwrap();
        assert_eq!(&out[4..6], &[0x00, 0x40], "64-byte length prefix");
        assert_eq!(out.len(), 1 + 1 + 1 + 1 + 2 + 64);
    }

    #[test]
    fn signature_count_sums_across_credentials() {
        let mut sigs = TransactionSignature::new();
        sigs.insert(CredentialIndex(0), KeyIndex(0), Signature::new(vec![1]));
        sigs.insert(CredentialIndex(0), KeyIndex(1), Signature::new(vec![2]));
        sigs.insert(CredentialIndex(5), KeyIndex(0), Signature::new(vec![3]));
        assert_eq!(sigs.signature_count(), 3);
        assert!(!sigs.is_empty());
    }

    #[test]
    fn insert_replaces_existing_slot() {
        let mut sigs = TransactionSignature::new();
        sigs.insert(CredentialIndex(0), KeyIndex(0), Signature::new(vec![1]));
        sigs.insert(CredentialIndex(0), KeyIndex(0), Signature::new(vec![2]));
        assert_eq!(sigs.signature_count(), 1);
    }

    #[test]
    fn encoding_is_insertion_order_independent() {
        let mut a = TransactionSignature::new();
        let mut b = TransactionSignature::new();
        for idx in [4u8, 0, 2] {
            a.insert(CredentialIndex(idx), KeyIndex(0), Signature::new(vec![idx]));
        }
        for idx in [0u8, 2, 4] {
            b.insert(CredentialIndex(idx), KeyIndex(0), Signature::new(vec![idx]));
        }

        let mut out_a = Vec::new();
        let mut out_b = Vec::new();
        encode_signatures(&a, &mut out_a).unwrap();
        encode_signatures(&b, &mut out_b).unwrap();
        assert_eq!(out_a, out_b);
    }
}
