//! Thread-safe handle over a [`Chain`].
//!
//! Appending reads the tip digest and then pushes, so two unsynchronized
//! writers could both link to the same predecessor. `SharedChain` makes the
//! write lock the only path to `append`, and validation takes the read lock,
//! so a validator never sees a half-applied append.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ChainConfig;
use crate::crypto::digest::Digest;
use crate::validation::FailureReport;

use super::block::Block;
use super::chain::Chain;

/// Cloneable, lock-protected chain handle.
#[derive(Debug, Clone, Default)]
pub struct SharedChain {
    inner: Arc<RwLock<Chain>>,
}

impl SharedChain {
    /// Empty shared chain with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty shared chain with an explicit configuration.
    pub fn with_config(config: ChainConfig) -> Self {
        Self::from_chain(Chain::with_config(config))
    }

    /// Take ownership of an existing chain.
    pub fn from_chain(chain: Chain) -> Self {
        Self {
            inner: Arc::new(RwLock::new(chain)),
        }
    }

    /// Append under the write lock. Returns the stored block's digest.
    pub fn append(&self, block: Block) -> Digest {
        self.inner.write().append(block).self_digest
    }

    /// Hooked append under the write lock. See [`Chain::append_with`].
    pub fn append_with<F>(&self, block: Block, hook: F) -> Digest
    where
        F: FnOnce(&mut Block),
    {
        self.inner.write().append_with(block, hook).self_digest
    }

    /// Validate the current contents under the read lock.
    pub fn validate(&self) -> FailureReport {
        self.inner.read().validate()
    }

    /// Owned copy of the chain as of now.
    pub fn snapshot(&self) -> Chain {
        self.inner.read().clone()
    }

    /// Current number of blocks.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_appends_stay_linked() {
        let shared = SharedChain::new();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let chain = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        chain.append(Block::new(format!("t{}-{}", t, i)));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.len(), 100);
        assert!(shared.validate().is_clean());

        let snapshot = shared.snapshot();
        for (i, block) in snapshot.iter().enumerate() {
            assert_eq!(block.index, i as i64);
        }
    }

    #[test]
    fn snapshot_is_detached() {
        let shared = SharedChain::new();
        shared.append(Block::new("a"));
        let snap = shared.snapshot();
        shared.append(Block::new("b"));
        assert_eq!(snap.len(), 1);
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn hooked_append_is_visible_to_validator() {
        let shared = SharedChain::new();
        shared.append_with(Block::new("a"), |b| b.previous_digest = Digest::filled(0xFF));
        assert!(!shared.validate().is_clean());
        assert!(!shared.is_empty());
    }
}
