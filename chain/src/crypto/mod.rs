//! # Cryptographic Primitives
//!
//! The digest type and the one hash function that produces it. Everything
//! that commits to block content flows through here.

pub mod digest;
pub mod hash;

pub use digest::Digest;
pub use hash::sha1_digest;
