//! Transaction header encoding.
//!
//! The header is the fixed 60-byte prefix shared by every account
//! transaction: who sends, in what order, paying how much energy, carrying
//! how many payload bytes, valid until when.
//!
//! [`TransactionHeader`] stores only the caller-supplied facts — sender,
//! nonce, expiry. Payload size and energy are passed to [`encode_header`]
//! as arguments because both are derived from the actual encoded payload and
//! the cost model; a header record that stored them could drift from the
//! bytes it describes.

use serde::{Deserialize, Serialize};

use crate::codec::{encode_uint, CodecError, Width};
use crate::transaction::types::{AccountAddress, Energy, Nonce, TransactionExpiry};

/// The caller-supplied portion of an account transaction header.
///
/// Deliberately has no energy or payload-size fields; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHeader {
    /// The sending account. Opaque 32 bytes, copied verbatim to the wire.
    pub sender: AccountAddress,
    /// The sender's sequence number for this transaction.
    pub nonce: Nonce,
    /// Unix epoch seconds after which the transaction is dead.
    pub expiry: TransactionExpiry,
}

/// Encode the header into `out`.
///
/// `payload_size` must be the byte length of `type tag ++ serialized
/// payload`, and `energy` the cost model's output — both freshly computed by
/// the assembler for this exact encoding. Layout, in order:
///
/// ```text
/// sender (32) ++ nonce (u64) ++ energy (u64) ++ payload size (u32) ++ expiry (u64)
/// ```
///
/// No validation happens here beyond the fixed-width encoder's range checks;
/// a `payload_size` wider than 32 bits is the one thing that can fail.
pub fn encode_header(
    header: &TransactionHeader,
    payload_size: usize,
    energy: Energy,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    out.extend_from_slice(header.sender.as_bytes());
    encode_uint(Width::U64, header.nonce.0, out)?;
    encode_uint(Width::U64, energy.0, out)?;
    encode_uint(Width::U32, payload_size as u64, out)?;
    encode_uint(Width::U64, header.expiry.epoch_seconds(), out)?;
    Ok(())
}
