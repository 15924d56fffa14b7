//! # Protocol Configuration & Constants
//!
//! Every magic number in the MERIDIAN wire format lives here. If you're
//! hardcoding a constant somewhere else, you're doing it wrong and you owe
//! the team coffee.
//!
//! Most of these values are consensus-critical: changing one after mainnet
//! launch changes every transaction hash on the network. Treat edits to this
//! file the way you'd treat edits to a deployed smart contract.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Block Item Kinds
// ---------------------------------------------------------------------------

/// Tag byte identifying an account transaction among the block item kinds
/// the network accepts. This crate only ever emits this kind.
pub const BLOCK_ITEM_KIND_ACCOUNT_TRANSACTION: u8 = 1;

/// Tag byte for credential deployments. Listed for completeness — credential
/// deployment encoding is handled by the identity layer, not this crate.
pub const BLOCK_ITEM_KIND_CREDENTIAL_DEPLOYMENT: u8 = 2;

// ---------------------------------------------------------------------------
// Submission Envelope
// ---------------------------------------------------------------------------

/// Version byte prefixed to an assembled transaction for submission.
/// Not part of the hashed bytes — the envelope exists only on the way to
/// the node, never inside a block.
pub const SUBMISSION_FORMAT_VERSION: u8 = 0;

// ---------------------------------------------------------------------------
// Field Widths
// ---------------------------------------------------------------------------

/// Account addresses are 32 opaque bytes. This crate never inspects them.
pub const ACCOUNT_ADDRESS_LENGTH: usize = 32;

/// Serialized transaction header length:
/// sender (32) + nonce (8) + energy (8) + payload size (4) + expiry (8).
pub const TRANSACTION_HEADER_LENGTH: usize = 60;

/// Digest length for both the signing digest and the transaction hash.
/// SHA-256, so 32 bytes. Every implementation must agree on this.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Ed25519 signature length. The wire format carries an explicit u16 length
/// prefix per signature anyway, so other schemes fit without a format change.
pub const ED25519_SIGNATURE_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Payload Limits
// ---------------------------------------------------------------------------

/// Maximum memo length in bytes. Enough for a reference string,
/// not enough for your novel.
pub const MAX_MEMO_LENGTH: usize = 256;

/// Maximum registered-data length in bytes. Same ceiling as memos.
pub const MAX_REGISTERED_DATA_LENGTH: usize = 256;

// ---------------------------------------------------------------------------
// Base Execution Costs
// ---------------------------------------------------------------------------
// Flat per-payload-type execution costs in energy units. These feed the
// injected cost model as its `base_cost` input; the size- and
// signature-dependent coefficients live with the embedder, not here.

/// Base execution cost of a plain transfer.
pub const BASE_COST_TRANSFER: u64 = 300;

/// Base execution cost of a transfer carrying a memo.
pub const BASE_COST_TRANSFER_WITH_MEMO: u64 = 300;

/// Base execution cost of registering a piece of data on chain.
pub const BASE_COST_REGISTER_DATA: u64 = 300;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Default transaction expiry window used by the `TransactionExpiry::after`
/// convenience path. Ten minutes: long enough to survive a slow mempool,
/// short enough that a stale transaction dies on its own.
pub const DEFAULT_EXPIRY_WINDOW: Duration = Duration::from_secs(600);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_item_kinds_are_distinct() {
        assert_ne!(
            BLOCK_ITEM_KIND_ACCOUNT_TRANSACTION,
            BLOCK_ITEM_KIND_CREDENTIAL_DEPLOYMENT
        );
    }

    #[test]
    fn submission_version_is_zero() {
        // The envelope version is pinned at 0 until the format changes.
        // If this fails, someone bumped it without a migration plan.
        assert_eq!(SUBMISSION_FORMAT_VERSION, 0);
    }

    #[test]
    fn header_length_is_sum_of_fields() {
        assert_eq!(TRANSACTION_HEADER_LENGTH, ACCOUNT_ADDRESS_LENGTH + 8 + 8 + 4 + 8);
    }

    #[test]
    fn payload_limits_fit_their_length_prefixes() {
        // Memos and registered data carry u16 length prefixes on the wire.
        assert!(MAX_MEMO_LENGTH <= u16::MAX as usize);
        assert!(MAX_REGISTERED_DATA_LENGTH <= u16::MAX as usize);
    }

    #[test]
    fn expiry_window_is_positive() {
        assert!(DEFAULT_EXPIRY_WINDOW.as_secs() > 0);
    }
}
