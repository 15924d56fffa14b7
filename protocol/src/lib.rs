// Copyright (c) 2026 Meridian Labs. MIT License.
// See LICENSE for details.

//! # MERIDIAN Protocol — Transaction Wire Format
//!
//! This crate is the part of MERIDIAN that absolutely must not be creative:
//! the deterministic binary encoding of a signed account transaction into the
//! exact byte sequence the consensus layer expects, plus the two digests
//! derived from it — the signing digest (what a key actually signs) and the
//! transaction hash (the network-wide lookup key).
//!
//! Everything else a node does — transport, connection management, response
//! reshaping, CLI niceties — lives elsewhere and talks to this crate through
//! plain bytes. If two independent implementations of this format ever
//! disagree by a single byte, their hashes diverge and the network stops
//! agreeing on what was submitted. So: big-endian everywhere, explicit sort
//! order everywhere, no incidental map iteration anywhere.
//!
//! ## Architecture
//!
//! The modules stack bottom-up, leaves first:
//!
//! - **codec** — Fixed-width big-endian integer encoding and size-prefixed
//!   ordered map encoding. The only place range validation happens.
//! - **crypto** — The SHA-256 digest primitive. Thin, audited, boring.
//! - **transaction** — Headers, payloads, the two-level signature block,
//!   and the assembler that concatenates it all and hashes the result.
//! - **config** — Protocol constants. Every magic number lives there.
//!
//! ## Design Philosophy
//!
//! 1. Derived facts are never stored. Payload size and energy are computed at
//!    encode time from the actual bytes — a header cannot drift from reality
//!    if it never carries the fields in the first place.
//! 2. Encoding is all-or-nothing. Malformed input gets an error, never a
//!    partial byte sequence.
//! 3. Every operation is a pure function. No shared state, no locks, no
//!    surprises under concurrency.

pub mod codec;
pub mod config;
pub mod crypto;
pub mod transaction;

pub use codec::CodecError;
pub use transaction::{
    assemble, encode_for_submission, signing_digest, signing_digest_with_count, transaction_hash,
    AccountTransaction, EncodeError, EnergyCostModel, Payload, TransactionHeader,
    TransactionSignature,
};
