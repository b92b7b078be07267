//! # Digest Type
//!
//! A fixed-width, SHA-1-sized content commitment. Blocks hold two of these:
//! their own digest and the one they claim their predecessor hashed to.
//!
//! The textual form is lowercase hex, two digits per byte, no separators and
//! no `0x` prefix. That form is used in the hashing preimage, in `Display`,
//! and in serde output, so it must stay stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::DIGEST_LENGTH;
use crate::error::ChainError;

/// A 20-byte block digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl Digest {
    /// The null digest: the predecessor sentinel of a genesis block.
    pub const NULL: Digest = Digest([0u8; DIGEST_LENGTH]);

    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// A digest with every byte set to `byte`. Handy for building
    /// deliberately wrong links.
    pub const fn filled(byte: u8) -> Self {
        Self([byte; DIGEST_LENGTH])
    }

    /// Whether this is the null digest.
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a hex string of exactly `2 * DIGEST_LENGTH` characters.
    /// Upper and lower case are both accepted.
    pub fn from_hex(s: &str) -> Result<Self, ChainError> {
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = ChainError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; DIGEST_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| ChainError::InvalidDigestLength {
                    expected: DIGEST_LENGTH,
                    got: bytes.len(),
                })?;
        Ok(Self(arr))
    }
}

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_digest_is_all_zero() {
        assert!(Digest::NULL.is_null());
        assert_eq!(Digest::NULL.as_bytes(), &[0u8; DIGEST_LENGTH]);
        assert_eq!(Digest::default(), Digest::NULL);
        assert!(!Digest::filled(0xFF).is_null());
    }

    #[test]
    fn hex_rendering_is_lowercase_without_prefix() {
        let d = Digest::filled(0xAB);
        let hex = d.to_hex();
        assert_eq!(hex.len(), 2 * DIGEST_LENGTH);
        assert_eq!(hex, "ab".repeat(DIGEST_LENGTH));
        assert_eq!(d.to_string(), hex);
    }

    #[test]
    fn parses_hex_in_either_case() {
        let d: Digest = "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709".parse().unwrap();
        assert_eq!(d.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(Digest::from_hex(&d.to_hex()).unwrap(), d);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Digest::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            ChainError::InvalidDigestLength {
                expected: DIGEST_LENGTH,
                got: 2
            }
        );
        assert!(Digest::try_from(&[0u8; 32][..]).is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let bad = "g".repeat(2 * DIGEST_LENGTH);
        assert!(matches!(
            Digest::from_hex(&bad),
            Err(ChainError::InvalidDigestHex(_))
        ));
    }

    #[test]
    fn serde_uses_hex_string() {
        let d = Digest::filled(0x01);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(DIGEST_LENGTH)));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Digest>("\"00\"").is_err());
    }
}
