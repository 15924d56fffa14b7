//! Core type definitions for MERIDIAN account transactions.
//!
//! These newtypes form the vocabulary of the wire format. They are
//! intentionally small and `Copy`-friendly where possible — most of them are
//! one integer wearing a name tag, and the name tag is the point: a `Nonce`
//! cannot be passed where an `Energy` is expected, no matter how much both
//! look like a `u64` at 2 a.m.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ACCOUNT_ADDRESS_LENGTH;

// ---------------------------------------------------------------------------
// AccountAddress
// ---------------------------------------------------------------------------

/// A fixed-size binary account identifier, opaque to this crate.
///
/// The wire format copies these 32 bytes verbatim into the transaction
/// header. Address derivation, checksums, and human-readable renderings are
/// the identity layer's business — here an address is a blob with a width.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountAddress([u8; ACCOUNT_ADDRESS_LENGTH]);

impl AccountAddress {
    /// Wraps raw address bytes.
    pub const fn from_bytes(bytes: [u8; ACCOUNT_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The raw address bytes.
    pub const fn as_bytes(&self) -> &[u8; ACCOUNT_ADDRESS_LENGTH] {
        &self.0
    }

    /// Hex rendering, lowercase, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; ACCOUNT_ADDRESS_LENGTH];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.to_hex())
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Nonce
// ---------------------------------------------------------------------------

/// Per-sender sequence number, strictly increasing.
///
/// Ordering is enforced by the chain, not by this crate — the encoder will
/// happily serialize any nonce you hand it. Valid account nonces start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Nonce(pub u64);

impl Nonce {
    /// The first valid nonce for a fresh account.
    pub const fn first() -> Self {
        Self(1)
    }

    /// The nonce that must follow this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Energy
// ---------------------------------------------------------------------------

/// The network's resource-metering unit.
///
/// A transaction must fund enough energy to cover its execution. The amount
/// embedded in a header is always computed by the injected cost model — it is
/// never chosen by the caller and never stored on a header record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Energy(pub u64);

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

/// A token amount in micromer, the smallest indivisible unit.
///
/// Always an integer — no floating point anywhere near money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(pub u64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TransactionExpiry
// ---------------------------------------------------------------------------

/// Transaction expiry as Unix epoch seconds.
///
/// The chain rejects a transaction whose expiry lies in the past at the time
/// of inclusion. This crate only serializes the value; the clock comparisons
/// happen in consensus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransactionExpiry(pub u64);

impl TransactionExpiry {
    /// Wraps an absolute Unix timestamp in seconds.
    pub const fn from_epoch_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    /// An expiry the given duration from now.
    ///
    /// Sub-second precision is dropped; the wire field is whole seconds.
    pub fn after(window: std::time::Duration) -> Self {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        Self(now + window.as_secs())
    }

    /// The raw epoch-seconds value.
    pub const fn epoch_seconds(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionExpiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Credential and key indices
// ---------------------------------------------------------------------------

/// Index of a credential on a multi-credential account.
///
/// Used as the outer key of the signature block. The derived `Ord` is plain
/// numeric order, which is exactly the encoding order the wire format
/// requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CredentialIndex(pub u8);

impl From<u8> for CredentialIndex {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for CredentialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a key under a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KeyIndex(pub u8);

impl From<u8> for KeyIndex {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for KeyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// A raw signature byte string, produced outside this crate.
///
/// The wire format carries an explicit u16 length prefix per signature, so
/// the length is scheme-dependent rather than fixed — Ed25519 signatures are
/// 64 bytes, but nothing here assumes that. This crate never verifies
/// signatures; it transports them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Wraps raw signature bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Signature length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length signature. The encoder accepts one — an empty
    /// signature is a scheme problem, not a framing problem.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hex rendering of the signature bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl From<[u8; 64]> for Signature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({} bytes, {})", self.0.len(), self.to_hex())
    }
}

impl Serialize for Signature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        Ok(Self(bytes))
    }
}

// ---------------------------------------------------------------------------
// Memo and RegisteredData
// ---------------------------------------------------------------------------

/// An opaque memo attached to a transfer.
///
/// Limited to [`crate::config::MAX_MEMO_LENGTH`] bytes; the limit is enforced
/// when the payload is serialized, keeping encoding all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Memo(Vec<u8>);

impl Memo {
    /// Wraps raw memo bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The raw memo bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Memo length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the memo carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Arbitrary data registered on chain via the `RegisterData` payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegisteredData(Vec<u8>);

impl RegisteredData {
    /// Wraps raw data bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The raw data bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Data length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no bytes are registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Discriminant for the operation an account transaction performs.
///
/// The tag values are consensus constants — they appear on the wire between
/// the header and the payload bytes, and the gaps in the numbering are
/// reserved by the protocol for operation kinds this crate does not encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransactionType {
    /// Simple value transfer between two accounts.
    Transfer = 3,
    /// Register an opaque piece of data on chain.
    RegisterData = 21,
    /// Value transfer carrying a memo.
    TransferWithMemo = 22,
}

impl TransactionType {
    /// The wire tag byte.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Looks up a type by its wire tag. Returns `None` for tags outside the
    /// closed set this crate encodes.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            3 => Some(Self::Transfer),
            21 => Some(Self::RegisterData),
            22 => Some(Self::TransferWithMemo),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transfer => write!(f, "Transfer"),
            Self::RegisterData => write!(f, "RegisterData"),
            Self::TransferWithMemo => write!(f, "TransferWithMemo"),
        }
    }
}

// ---------------------------------------------------------------------------
// Digests
// ---------------------------------------------------------------------------

/// The digest a signer signs, computed before any signature exists.
///
/// Covers `header ++ type tag ++ payload` — deliberately not the block item
/// kind byte or the signature block, neither of which can exist yet at
/// signing time.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SigningDigest([u8; 32]);

impl SigningDigest {
    pub(crate) const fn from_digest(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes — this is what gets signed.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex rendering, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SigningDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for SigningDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningDigest({})", self.to_hex())
    }
}

/// The hash of a fully assembled, signed transaction — the network's lookup
/// identifier. Rendered as hex wherever it crosses an API boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionHash([u8; 32]);

impl TransactionHash {
    pub(crate) const fn from_digest(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw hash bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex rendering, 64 characters — the form used for status lookup.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionHash({})", self.to_hex())
    }
}

impl Serialize for TransactionHash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TransactionHash {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&s, &mut bytes).map_err(serde::de::Error::custom)?;
        Ok(Self(bytes))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_hex_roundtrip() {
        let addr = AccountAddress::from_bytes([0xAB; 32]);
        let recovered = AccountAddress::from_hex(&addr.to_hex()).unwrap();
        assert_eq!(addr, recovered);
        assert_eq!(addr.to_hex().len(), 64);
    }

    #[test]
    fn address_rejects_short_hex() {
        assert!(AccountAddress::from_hex("abcd").is_err());
    }

    #[test]
    fn address_serde_is_hex_string() {
        let addr = AccountAddress::from_bytes([0x01; 32]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        let recovered: AccountAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, recovered);
    }

    #[test]
    fn nonce_sequence() {
        assert_eq!(Nonce::first(), Nonce(1));
        assert_eq!(Nonce::first().next(), Nonce(2));
    }

    #[test]
    fn expiry_after_is_in_the_future() {
        let expiry = TransactionExpiry::after(std::time::Duration::from_secs(600));
        let now = chrono::Utc::now().timestamp() as u64;
        assert!(expiry.epoch_seconds() >= now + 599);
    }

    #[test]
    fn credential_index_orders_numerically() {
        assert!(CredentialIndex(0) < CredentialIndex(1));
        assert!(CredentialIndex(1) < CredentialIndex(200));
    }

    #[test]
    fn signature_from_ed25519_array() {
        let sig = Signature::from([7u8; 64]);
        assert_eq!(sig.len(), 64);
        assert_eq!(sig.as_bytes()[0], 7);
    }

    #[test]
    fn signature_serde_is_hex_string() {
        let sig = Signature::new(vec![0xAA, 0xBB]);
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, "\"aabb\"");
        let recovered: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(sig, recovered);
    }

    #[test]
    fn transaction_type_tags_are_protocol_constants() {
        assert_eq!(TransactionType::Transfer.tag(), 3);
        assert_eq!(TransactionType::RegisterData.tag(), 21);
        assert_eq!(TransactionType::TransferWithMemo.tag(), 22);
    }

    #[test]
    fn transaction_type_from_tag_is_closed() {
        assert_eq!(TransactionType::from_tag(3), Some(TransactionType::Transfer));
        assert_eq!(
            TransactionType::from_tag(22),
            Some(TransactionType::TransferWithMemo)
        );
        assert_eq!(TransactionType::from_tag(0), None);
        assert_eq!(TransactionType::from_tag(255), None);
    }

    #[test]
    fn transaction_type_display() {
        assert_eq!(TransactionType::Transfer.to_string(), "Transfer");
        assert_eq!(TransactionType::RegisterData.to_string(), "RegisterData");
    }
}
