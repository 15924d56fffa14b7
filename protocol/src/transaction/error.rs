//! Error types for transaction encoding.
//!
//! Every failure is detected synchronously at the point of malformed input
//! and propagated immediately — there is no retry, no partial encoding, and
//! a caller that gets an `Err` gets no bytes.

use thiserror::Error;

use crate::codec::CodecError;
use crate::transaction::types::TransactionType;

/// Errors that can occur while encoding an account transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The signature set has no credential entries, or a credential entry
    /// carries zero signatures. A transaction must hold at least one
    /// signature to be encodable.
    #[error("signature set must contain at least one credential with at least one signature")]
    EmptySignatureSet,

    /// The payload violates the shape rules of its transaction type
    /// (e.g. a memo or registered-data blob over the protocol limit).
    #[error("unsupported {transaction_type} payload: {reason}")]
    UnsupportedPayload {
        /// The type whose rules were violated.
        transaction_type: TransactionType,
        /// What was wrong with the shape.
        reason: String,
    },

    /// A codec-level failure: a field value or map count outside its
    /// declared wire width.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
