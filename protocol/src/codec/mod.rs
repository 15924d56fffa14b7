//! # Wire Codec Primitives
//!
//! The two encoding primitives everything else is built from:
//!
//! ```text
//! uint.rs — fixed-width big-endian unsigned integers with bounds checking
//! map.rs  — size-prefixed encoding of an ordered key → value mapping
//! ```
//!
//! These are deliberately dumb. They know nothing about transactions,
//! signatures, or headers — they know how to put integers and sorted maps on
//! the wire, and they are the *only* place numeric range validation happens.
//! Callers pass values through and trust the codec to reject what doesn't
//! fit; re-validating upstream would just create two sources of truth.

pub mod map;
pub mod uint;

pub use map::encode_map;
pub use uint::{encode_uint, Width};

use thiserror::Error;

/// Errors produced by the codec primitives.
///
/// Both variants mean the same thing at heart — a number didn't fit the
/// declared wire width — but they point at different culprits: a field value
/// versus a map that grew past its count prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The value exceeds the representable range of the declared width.
    #[error("value {value} does not fit in {bits} bits")]
    OutOfRange {
        /// Declared field width in bits.
        bits: u32,
        /// The offending value.
        value: u64,
    },

    /// A map holds more entries than its count prefix can carry.
    #[error("map with {len} entries overflows its {bits}-bit count prefix")]
    CountOverflow {
        /// Width of the count prefix in bits.
        bits: u32,
        /// Actual number of entries.
        len: usize,
    },
}
