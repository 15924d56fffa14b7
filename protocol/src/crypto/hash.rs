//! # Hashing
//!
//! Thin, type-safe wrappers around the audited `sha2` implementation.
//! SHA-256 is the only digest this wire format speaks: 32-byte output,
//! identical across every conforming implementation.
//!
//! If you're tempted to swap in a faster hash, remember that the output of
//! these functions *is* the transaction identity on the network. A faster
//! hash that nobody else computes is just a very efficient way to disagree.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// Returns the 32-byte digest as a fixed-size array — the callers here all
/// want a `[u8; 32]` to wrap in a digest newtype, so there's no reason to
/// heap-allocate.
///
/// # Example
///
/// ```
/// use meridian_protocol::crypto::sha256;
///
/// let digest = sha256(b"meridian");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA-256 over an ordered sequence of byte buffers.
///
/// Feeds each part into the hasher in order instead of concatenating into a
/// temporary buffer. Same digest as hashing the concatenation, one less
/// allocation. The assembler uses this to hash `header ++ type ++ payload`
/// without building a scratch copy.
///
/// Order matters: `sha256_multi(&[a, b]) != sha256_multi(&[b, a])` unless
/// you're very unlucky.
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
