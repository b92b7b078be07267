//! # Chain Integrity Validator
//!
//! A read-only, single pass over the blocks. The scan carries one piece of
//! state, the digest the next block is expected to point at:
//!
//! ```text
//! expected = None
//! for block in blocks:
//!     None          → block.previous_digest must be NULL   (CorruptedGenesis)
//!     Some(digest)  → block.previous_digest must == digest (CorruptedLink)
//!     expected = Some(block.self_digest)
//! ```
//!
//! The stored `self_digest` always becomes the next expectation, even for a
//! block that was just flagged. The scan never re-synchronizes, so one bad
//! link is reported once and does not mask or repair anything downstream.
//!
//! [`validate_blocks`] folds everything into the sticky per-chain flags.
//! [`find_faults`] walks the same way but records where each fault is.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::crypto::digest::Digest;
use crate::ledger::{Block, Chain};

use super::report::{FailureDimension, FailureReport};

/// One localized integrity fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fault {
    /// Position of the offending block in the chain.
    pub position: usize,
    /// Which check it failed.
    pub dimension: FailureDimension,
    /// The digest the block should have pointed at.
    pub expected: Digest,
    /// The digest it actually points at.
    pub found: Digest,
}

/// Validate a chain. Equivalent to [`Chain::validate`].
pub fn validate(chain: &Chain) -> FailureReport {
    validate_blocks(chain.blocks())
}

/// Validate an ordered block slice. An empty slice is a clean report.
pub fn validate_blocks(blocks: &[Block]) -> FailureReport {
    let mut report = FailureReport::new();
    for fault in scan(blocks) {
        report.set(fault.dimension);
    }

    if report.is_clean() {
        info!(blocks = blocks.len(), "chain validated clean");
    } else {
        warn!(blocks = blocks.len(), report = %report, "chain integrity violated");
    }
    report
}

/// Every fault in `chain`, in chain order.
pub fn find_faults(chain: &Chain) -> Vec<Fault> {
    scan(chain.blocks()).collect()
}

fn scan(blocks: &[Block]) -> impl Iterator<Item = Fault> + '_ {
    let mut expected: Option<Digest> = None;
    blocks.iter().enumerate().filter_map(move |(position, block)| {
        let fault = match expected {
            None if !block.previous_digest.is_null() => Some(Fault {
                position,
                dimension: FailureDimension::CorruptedGenesis,
                expected: Digest::NULL,
                found: block.previous_digest,
            }),
            Some(digest) if block.previous_digest != digest => Some(Fault {
                position,
                dimension: FailureDimension::CorruptedLink,
                expected: digest,
                found: block.previous_digest,
            }),
            _ => None,
        };
        if let Some(f) = &fault {
            debug!(
                position = f.position,
                dimension = %f.dimension,
                expected = %f.expected,
                found = %f.found,
                "integrity fault"
            );
        }
        expected = Some(block.self_digest);
        fault
    })
}
