//! Payload variants and their wire serialization.
//!
//! The transaction-type tag space is fixed by the protocol, so payload
//! dispatch is a closed enum: adding a variant forces every `match` in the
//! crate to acknowledge it, and a tag/payload mismatch is unrepresentable —
//! the tag is derived from the variant, never stored beside it.
//!
//! Each variant knows three things: its wire tag, its serialized byte form,
//! and its base execution cost (the flat per-operation component the injected
//! cost model receives as input).

use serde::{Deserialize, Serialize};

use crate::codec::{encode_uint, Width};
use crate::config::{
    BASE_COST_REGISTER_DATA, BASE_COST_TRANSFER, BASE_COST_TRANSFER_WITH_MEMO, MAX_MEMO_LENGTH,
    MAX_REGISTERED_DATA_LENGTH,
};
use crate::transaction::error::EncodeError;
use crate::transaction::types::{
    AccountAddress, Amount, Energy, Memo, RegisteredData, TransactionType,
};

/// The operation-specific body of an account transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    /// Move `amount` micromer to `to`.
    Transfer {
        /// Receiving account.
        to: AccountAddress,
        /// Amount in micromer.
        amount: Amount,
    },
    /// Register an opaque blob on chain.
    RegisterData {
        /// The bytes to register, at most
        /// [`MAX_REGISTERED_DATA_LENGTH`] long.
        data: RegisteredData,
    },
    /// Move `amount` micromer to `to`, attaching a memo.
    TransferWithMemo {
        /// Receiving account.
        to: AccountAddress,
        /// Attached memo, at most [`MAX_MEMO_LENGTH`] bytes.
        memo: Memo,
        /// Amount in micromer.
        amount: Amount,
    },
}

impl Payload {
    /// The transaction type this payload encodes as.
    pub const fn transaction_type(&self) -> TransactionType {
        match self {
            Payload::Transfer { .. } => TransactionType::Transfer,
            Payload::RegisterData { .. } => TransactionType::RegisterData,
            Payload::TransferWithMemo { .. } => TransactionType::TransferWithMemo,
        }
    }

    /// Serialize the payload body — the bytes that follow the type tag on
    /// the wire. The tag itself is written by the assembler.
    ///
    /// Wire forms:
    ///
    /// ```text
    /// Transfer:         to (32) ++ amount (u64)
    /// RegisterData:     length (u16) ++ data
    /// TransferWithMemo: to (32) ++ length (u16) ++ memo ++ amount (u64)
    /// ```
    ///
    /// Fails with [`EncodeError::UnsupportedPayload`] when a memo or data
    /// blob exceeds its protocol limit. Nothing is returned on failure —
    /// encoding is all-or-nothing.
    pub fn serialize(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            Payload::Transfer { to, amount } => {
                let mut out = Vec::with_capacity(40);
                out.extend_from_slice(to.as_bytes());
                encode_uint(Width::U64, amount.0, &mut out)?;
                Ok(out)
            }
            Payload::RegisterData { data } => {
                if data.len() > MAX_REGISTERED_DATA_LENGTH {
                    return Err(self.oversize(data.len(), MAX_REGISTERED_DATA_LENGTH, "data"));
                }
                let mut out = Vec::with_capacity(2 + data.len());
                encode_uint(Width::U16, data.len() as u64, &mut out)?;
                out.extend_from_slice(data.as_bytes());
                Ok(out)
            }
            Payload::TransferWithMemo { to, memo, amount } => {
                if memo.len() > MAX_MEMO_LENGTH {
                    return Err(self.oversize(memo.len(), MAX_MEMO_LENGTH, "memo"));
                }
                let mut out = Vec::with_capacity(32 + 2 + memo.len() + 8);
                out.extend_from_slice(to.as_bytes());
                encode_uint(Width::U16, memo.len() as u64, &mut out)?;
                out.extend_from_slice(memo.as_bytes());
                encode_uint(Width::U64, amount.0, &mut out)?;
                Ok(out)
            }
        }
    }

    /// Flat execution cost of this operation kind, fed to the injected cost
    /// model as its `base_cost` input.
    pub const fn base_energy_cost(&self) -> Energy {
        match self {
            Payload::Transfer { .. } => Energy(BASE_COST_TRANSFER),
            Payload::RegisterData { .. } => Energy(BASE_COST_REGISTER_DATA),
            Payload::TransferWithMemo { .. } => Energy(BASE_COST_TRANSFER_WITH_MEMO),
        }
    }

    fn oversize(&self, len: usize, max: usize, field: &str) -> EncodeError {
        EncodeError::UnsupportedPayload {
            transaction_type: self.transaction_type(),
            reason: format!("{field} is {len} bytes, limit is {max}"),
        }
    }
}
