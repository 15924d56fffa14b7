//! # Transaction Module
//!
//! Construction and deterministic wire encoding of MERIDIAN account
//! transactions, plus the two digests derived from the encoding.
//!
//! ## Architecture
//!
//! ```text
//! types.rs      — Domain newtypes (addresses, nonces, indices, digests, ...)
//! error.rs      — EncodeError: every way encoding can fail
//! header.rs     — The fixed 60-byte header and its encoder
//! payload.rs    — Closed payload enum: wire forms, tags, base costs
//! signatures.rs — The two-level credential/key signature block
//! energy.rs     — The injected EnergyCostModel seam
//! assemble.rs   — The assembler and digest functions
//! ```
//!
//! ## Submission Lifecycle
//!
//! 1. **Build** — bundle a [`TransactionHeader`] and [`Payload`] into an
//!    [`AccountTransaction`].
//! 2. **Digest** — compute [`signing_digest`] (or
//!    [`signing_digest_with_count`] for multi-signature signers).
//! 3. **Sign** — outside this crate: keys sign the digest bytes.
//! 4. **Attach** — collect the signatures into a [`TransactionSignature`].
//! 5. **Submit** — [`encode_for_submission`] produces the envelope;
//!    [`transaction_hash`] is the key to look the transaction up later.
//!
//! ## Design Decisions
//!
//! - Signature maps are `BTreeMap`s keyed by numeric index newtypes, so
//!   ascending-index encoding order is structural rather than a sort bolted
//!   on before hashing.
//! - The payload enum owns its type tag; there is no way to pair a tag with
//!   the wrong payload shape.
//! - Payload size and energy never live on the header record. They are
//!   derived from the real encoded bytes and the injected cost model at
//!   encode time, every time.

pub mod assemble;
pub mod energy;
pub mod error;
pub mod header;
pub mod payload;
pub mod signatures;
pub mod types;

pub use assemble::{
    assemble, encode_for_submission, signing_digest, signing_digest_with_count, transaction_hash,
    AccountTransaction,
};
pub use energy::EnergyCostModel;
pub use error::EncodeError;
pub use header::{encode_header, TransactionHeader};
pub use payload::Payload;
pub use signatures::{encode_signatures, TransactionSignature};
pub use types::{
    AccountAddress, Amount, CredentialIndex, Energy, KeyIndex, Memo, Nonce, RegisteredData,
    Signature, SigningDigest, TransactionExpiry, TransactionHash, TransactionType,
};
