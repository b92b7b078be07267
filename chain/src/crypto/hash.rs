//! # Hashing Utilities
//!
//! The single hash function behind every block digest. It is SHA-1, via the
//! RustCrypto `sha1` crate, because the digest width (20 bytes) is baked into
//! the chain format.
//!
//! Swapping the algorithm is a format break. Do it here and nowhere else, and
//! bump `SERIALIZATION_VERSION` in the same change.

use sha1::{Digest as _, Sha1};

use crate::config::DIGEST_LENGTH;
use crate::crypto::digest::Digest;

/// Compute the SHA-1 digest of `data`.
///
/// Total over all inputs; SHA-1's 2^64-bit message limit is not reachable
/// from an in-memory payload.
///
/// # Example
///
/// ```
/// use linkchain::crypto::sha1_digest;
///
/// let d = sha1_digest(b"");
/// assert_eq!(d.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
/// ```
pub fn sha1_digest(data: &[u8]) -> Digest {
    let mut hasher = Sha1::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; DIGEST_LENGTH];
    output.copy_from_slice(&result);
    Digest::from_bytes(output)
}
