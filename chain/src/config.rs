//! # Chain Configuration & Constants
//!
//! Every constant that feeds into a block digest lives here. Changing any of
//! them changes every hash ever produced, so treat this file as part of the
//! wire format, not as a tuning knob.

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// Hash function used for block digests.
///
/// SHA-1 matches the reference digest width. It is no longer collision
/// resistant against a motivated attacker; a chain that needs that property
/// must bump [`SERIALIZATION_VERSION`] along with the algorithm.
pub const HASH_ALGORITHM: &str = "SHA-1";

/// Digest length in bytes. SHA-1 always produces 20.
pub const DIGEST_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Separator placed before every field of the hashing preimage.
pub const FIELD_SEPARATOR: char = '|';

/// Escape character for separator and escape occurrences inside `data`.
pub const ESCAPE_CHAR: char = '\\';

/// Version tag of the preimage layout. Not part of the preimage itself; it
/// exists so callers can pin the format they were built against.
pub const SERIALIZATION_VERSION: u16 = 1;

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// Index of a block that has not been given a chain position yet.
pub const UNASSIGNED_INDEX: i64 = -1;

// ---------------------------------------------------------------------------
// Chain Configuration
// ---------------------------------------------------------------------------

/// How `Chain::append` treats the `index` field of an incoming block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// Overwrite `index` with the chain length before hashing, so two
    /// otherwise identical blocks at different positions hash differently.
    #[default]
    AssignPosition,
    /// Hash whatever index the caller left on the block (the sentinel if
    /// untouched). Reproduces the legacy digest layout.
    CallerAssigned,
}

/// Tunable parameters for a [`Chain`](crate::ledger::Chain).
#[derive(Debug, Clone, Default)]
pub struct ChainConfig {
    /// Index assignment on append.
    pub index_policy: IndexPolicy,
}

impl ChainConfig {
    /// Config that keeps caller-provided indices untouched.
    pub fn caller_assigned() -> Self {
        Self {
            index_policy: IndexPolicy::CallerAssigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_length_matches_algorithm() {
        assert_eq!(HASH_ALGORITHM, "SHA-1");
        assert_eq!(DIGEST_LENGTH, 20);
    }

    #[test]
    fn separator_and_escape_differ() {
        // If these were equal the escaping scheme would be ambiguous again.
        assert_ne!(FIELD_SEPARATOR, ESCAPE_CHAR);
    }

    #[test]
    fn default_policy_assigns_positions() {
        assert_eq!(ChainConfig::default().index_policy, IndexPolicy::AssignPosition);
        assert_eq!(
            ChainConfig::caller_assigned().index_policy,
            IndexPolicy::CallerAssigned
        );
    }

    #[test]
    fn unassigned_index_is_negative() {
        assert!(UNASSIGNED_INDEX < 0);
    }
}
