//! Error types for linkchain.
//!
//! Building, hashing and appending never fail. Errors only come from the
//! edges: parsing digests supplied from outside and checked block lookups.

use thiserror::Error;

/// Errors returned by the fallible linkchain surfaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// A digest was built from a byte slice of the wrong width.
    #[error("invalid digest length: expected {expected} bytes, got {got}")]
    InvalidDigestLength {
        /// Required width in bytes.
        expected: usize,
        /// Width that was supplied.
        got: usize,
    },

    /// A digest string was not valid hexadecimal.
    #[error("invalid digest hex: {0}")]
    InvalidDigestHex(String),

    /// A checked lookup asked for a position past the chain tip.
    #[error("no block at position {index} (chain length {len})")]
    BlockNotFound {
        /// Requested position.
        index: usize,
        /// Chain length at the time of the lookup.
        len: usize,
    },
}

impl From<hex::FromHexError> for ChainError {
    fn from(e: hex::FromHexError) -> Self {
        Self::InvalidDigestHex(e.to_string())
    }
}
