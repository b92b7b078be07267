//! # Block Structure
//!
//! A block is one unit of chained data: an opaque text payload plus the two
//! digests that tie it to its predecessor.
//!
//! ## Block Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Block                                       │
//! │  ├── data: String          (opaque payload)  │
//! │  ├── index: i64            (-1 = unassigned) │
//! │  ├── timestamp: i64        (µs since epoch)  │
//! │  ├── previous_digest: [u8; 20]               │
//! │  └── self_digest: [u8; 20] (SHA-1 of below)  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Hash Preimage
//!
//! ```text
//! "|" escape(data) "|" index "|" hex(previous_digest) "|" timestamp
//! ```
//!
//! `escape` turns `\` into `\\` and `|` into `\|`. A payload without either
//! character serializes exactly as the legacy unescaped layout did; a payload
//! with them can no longer be confused with a different field split.
//! `self_digest` is never part of its own preimage.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{ESCAPE_CHAR, FIELD_SEPARATOR, UNASSIGNED_INDEX};
use crate::crypto::digest::Digest;
use crate::crypto::hash::sha1_digest;

/// A single chained record.
///
/// Fields are public so a corruption hook can rewrite them, but once a block
/// sits in a [`Chain`](super::Chain) it is only reachable through shared
/// references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Arbitrary text payload. The engine never interprets it.
    pub data: String,
    /// Chain position, or [`UNASSIGNED_INDEX`] before append.
    pub index: i64,
    /// Creation time in microseconds since the Unix epoch. Hashed, never
    /// used for ordering.
    pub timestamp: i64,
    /// The digest this block claims its predecessor hashed to. Null for
    /// genesis.
    pub previous_digest: Digest,
    /// SHA-1 over [`Block::serialize`]. Filled in by the chain on append.
    pub self_digest: Digest,
}

impl Block {
    /// Create a block stamped with the current wall-clock time.
    ///
    /// The index is left at the unassigned sentinel and both digests are
    /// zeroed; the chain fills them in on append.
    pub fn new(data: impl Into<String>) -> Self {
        Self::with_timestamp(data, Utc::now().timestamp_micros())
    }

    /// Create a block with an explicit timestamp. Two blocks built from the
    /// same data and timestamp serialize identically.
    pub fn with_timestamp(data: impl Into<String>, timestamp: i64) -> Self {
        Block {
            data: data.into(),
            index: UNASSIGNED_INDEX,
            timestamp,
            previous_digest: Digest::NULL,
            self_digest: Digest::NULL,
        }
    }

    /// Canonical byte encoding fed to the hash function.
    pub fn serialize(&self) -> Vec<u8> {
        let data = escape_field(&self.data);
        let index = self.index.to_string();
        let previous = self.previous_digest.to_hex();
        let timestamp = self.timestamp.to_string();

        let mut preimage =
            String::with_capacity(4 + data.len() + index.len() + previous.len() + timestamp.len());
        for field in [&*data, index.as_str(), previous.as_str(), timestamp.as_str()] {
            preimage.push(FIELD_SEPARATOR);
            preimage.push_str(field);
        }
        preimage.into_bytes()
    }

    /// Apply the block hash function to an already serialized preimage.
    pub fn compute_digest(serialized: &[u8]) -> Digest {
        sha1_digest(serialized)
    }

    /// The digest the block's current fields hash to.
    ///
    /// Equal to `self_digest` for any block that went through an unhooked
    /// append and was not modified since.
    pub fn recompute_digest(&self) -> Digest {
        Self::compute_digest(&self.serialize())
    }

    /// Whether the block was given a chain position.
    pub fn is_positioned(&self) -> bool {
        self.index != UNASSIGNED_INDEX
    }

    /// Creation time as a UTC datetime, or `None` if the timestamp is out
    /// of chrono's range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.div_euclid(1_000_000);
        let nanos = (self.timestamp.rem_euclid(1_000_000) * 1_000) as u32;
        DateTime::from_timestamp(secs, nanos)
    }
}

/// Escape the separator and the escape character inside a payload.
fn escape_field(data: &str) -> Cow<'_, str> {
    if !data.contains([FIELD_SEPARATOR, ESCAPE_CHAR]) {
        return Cow::Borrowed(data);
    }
    let mut escaped = String::with_capacity(data.len() + 8);
    for c in data.chars() {
        if c == FIELD_SEPARATOR || c == ESCAPE_CHAR {
            escaped.push(ESCAPE_CHAR);
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
