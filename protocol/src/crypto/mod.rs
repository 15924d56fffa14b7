//! # Cryptographic Primitives
//!
//! One hash function, no alternatives. The wire format pins SHA-256 for both
//! the signing digest and the transaction hash, because every implementation
//! of this format — in any language — must produce bit-identical digests or
//! hashes stop being comparable across the network.
//!
//! Signature *production* deliberately does not live here. This crate consumes
//! pre-computed signature bytes; how they were made (software key, HSM,
//! remote signer) is the embedder's business.

pub mod hash;

pub use hash::{sha256, sha256_multi};
