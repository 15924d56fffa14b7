//! Transaction assembly and the two digests.
//!
//! This is where the leaves meet: the assembler concatenates the kind byte,
//! the signature block, the header, the type tag, and the payload bytes in
//! that fixed order, and the two digest functions hash the relevant slices
//! of that concatenation.
//!
//! Everything here is a pure function of its inputs. Nothing is cached,
//! nothing is mutated in place, and two threads encoding the same
//! transaction get byte-identical answers without coordination.

use serde::{Deserialize, Serialize};

use tracing::{debug, trace};

use crate::config::{
    BLOCK_ITEM_KIND_ACCOUNT_TRANSACTION, SUBMISSION_FORMAT_VERSION, TRANSACTION_HEADER_LENGTH,
};
use crate::crypto::hash::{sha256, sha256_multi};
use crate::transaction::energy::EnergyCostModel;
use crate::transaction::error::EncodeError;
use crate::transaction::header::{encode_header, TransactionHeader};
use crate::transaction::payload::Payload;
use crate::transaction::signatures::{encode_signatures, TransactionSignature};
use crate::transaction::types::{SigningDigest, TransactionHash};

/// An unsigned account transaction: header plus payload.
///
/// The type tag is derived from the payload variant, so a transaction cannot
/// claim one operation and carry another. Constructed fresh per submission
/// attempt and treated as immutable from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransaction {
    /// Sender, nonce, and expiry. Energy and payload size are not here —
    /// they are computed at encode time.
    pub header: TransactionHeader,
    /// The operation this transaction performs.
    pub payload: Payload,
}

impl AccountTransaction {
    /// Bundles a header and payload.
    pub fn new(header: TransactionHeader, payload: Payload) -> Self {
        Self { header, payload }
    }
}

/// Assemble the full wire form of a signed transaction:
///
/// ```text
/// kind byte ++ signature block ++ header ++ type tag ++ payload
/// ```
///
/// The header's payload-size field is computed from the actual serialized
/// payload (`type tag ++ payload bytes`), and its energy field from the
/// injected cost model and the set's real signature count. The hash of this
/// byte sequence is the canonical transaction identifier.
///
/// Fails — returning no bytes at all — if the signature set is empty or the
/// payload violates its shape rules.
pub fn assemble(
    tx: &AccountTransaction,
    sigs: &TransactionSignature,
    cost_model: &impl EnergyCostModel,
) -> Result<Vec<u8>, EncodeError> {
    let payload_bytes = tx.payload.serialize()?;
    let payload_size = payload_bytes.len() + 1; // type tag ++ payload
    let energy = cost_model.cost(
        sigs.signature_count(),
        payload_size,
        tx.payload.base_energy_cost(),
    );
    trace!(
        signature_count = sigs.signature_count(),
        payload_size,
        energy = %energy,
        "computed derived header fields"
    );

    let mut out = Vec::with_capacity(1 + 16 + TRANSACTION_HEADER_LENGTH + payload_size);
    out.push(BLOCK_ITEM_KIND_ACCOUNT_TRANSACTION);
    encode_signatures(sigs, &mut out)?;
    encode_header(&tx.header, payload_size, energy, &mut out)?;
    out.push(tx.payload.transaction_type().tag());
    out.extend_from_slice(&payload_bytes);

    debug!(
        transaction_type = %tx.payload.transaction_type(),
        size = out.len(),
        "assembled account transaction"
    );
    Ok(out)
}

/// The digest a signer signs, assuming a single signature.
///
/// Equivalent to [`signing_digest_with_count`] with a count of 1 — the
/// common case of one credential, one key.
pub fn signing_digest(
    tx: &AccountTransaction,
    cost_model: &impl EnergyCostModel,
) -> Result<SigningDigest, EncodeError> {
    signing_digest_with_count(tx, cost_model, 1)
}

/// The digest a signer signs, for a signer planning to attach
/// `assumed_signature_count` signatures.
///
/// Hashes `header ++ type tag ++ payload` — deliberately not the kind byte
/// and not the signature block, since no signature exists before this digest
/// does. The count feeds the cost model so the energy figure hashed here
/// matches the one embedded after real signing; a count that doesn't match
/// what the signer actually attaches is a caller error this function cannot
/// detect.
pub fn signing_digest_with_count(
    tx: &AccountTransaction,
    cost_model: &impl EnergyCostModel,
    assumed_signature_count: u32,
) -> Result<SigningDigest, EncodeError> {
    let payload_bytes = tx.payload.serialize()?;
    let payload_size = payload_bytes.len() + 1;
    let energy = cost_model.cost(
        assumed_signature_count,
        payload_size,
        tx.payload.base_energy_cost(),
    );

    let mut header_bytes = Vec::with_capacity(TRANSACTION_HEADER_LENGTH);
    encode_header(&tx.header, payload_size, energy, &mut header_bytes)?;

    let tag = [tx.payload.transaction_type().tag()];
    Ok(SigningDigest::from_digest(sha256_multi(&[
        &header_bytes,
        &tag,
        &payload_bytes,
    ])))
}

/// The network-visible transaction identifier: SHA-256 over the full
/// [`assemble`] output. Render it with [`TransactionHash::to_hex`] for
/// status lookup.
pub fn transaction_hash(
    tx: &AccountTransaction,
    sigs: &TransactionSignature,
    cost_model: &impl EnergyCostModel,
) -> Result<TransactionHash, EncodeError> {
    let bytes = assemble(tx, sigs, cost_model)?;
    Ok(TransactionHash::from_digest(sha256(&bytes)))
}

/// The version-prefixed envelope sent to the network:
/// `version byte 0 ++ assemble(..)`.
///
/// The version byte exists only on the submission path — it is never part
/// of the hashed bytes.
pub fn encode_for_submission(
    tx: &AccountTransaction,
    sigs: &TransactionSignature,
    cost_model: &impl EnergyCostModel,
) -> Result<Vec<u8>, EncodeError> {
    let assembled = assemble(tx, sigs, cost_model)?;
    let mut out = Vec::with_capacity(1 + assembled.len());
    out.push(SUBMISSION_FORMAT_VERSION);
    out.extend_from_slice(&assembled);
    Ok(out)
}
