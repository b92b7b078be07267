//! In-memory, append-only chain with hash linking.
//!
//! The chain owns the linking step. Each append:
//!
//! ```text
//! 1. LINK    — previous_digest := tip.self_digest (or NULL on empty chain)
//! 2. INDEX   — index := len, under IndexPolicy::AssignPosition
//! 3. HASH    — self_digest := SHA-1(serialize(block))
//! 4. HOOK    — optional caller closure, only via `append_with`
//! 5. STORE   — push onto the sequence
//! ```
//!
//! Appending never fails. Whether the result is intact is a question for
//! [`crate::validation`], not for the append path.

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::{ChainConfig, IndexPolicy};
use crate::crypto::digest::Digest;
use crate::error::ChainError;
use crate::validation::{validate_blocks, FailureReport};

use super::block::Block;

/// Ordered, append-only sequence of linked blocks.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    config: ChainConfig,
    blocks: Vec<Block>,
}

impl Chain {
    /// Empty chain with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty chain with an explicit configuration.
    pub fn with_config(config: ChainConfig) -> Self {
        Self {
            config,
            blocks: Vec::new(),
        }
    }

    /// Link, hash and store `block`, returning the stored block.
    pub fn append(&mut self, block: Block) -> &Block {
        let linked = self.link(block);
        self.store(linked, false)
    }

    /// Like [`Chain::append`], but runs `hook` on the block after its digests
    /// are computed and before it is stored.
    ///
    /// The hook may overwrite any field, digests included, and nothing is
    /// recomputed afterwards. This is how tests plant corruption that the
    /// validator must then find; production code has no reason to call it.
    pub fn append_with<F>(&mut self, block: Block, hook: F) -> &Block
    where
        F: FnOnce(&mut Block),
    {
        let mut linked = self.link(block);
        hook(&mut linked);
        self.store(linked, true)
    }

    fn link(&self, mut block: Block) -> Block {
        block.previous_digest = self
            .blocks
            .last()
            .map(|tip| tip.self_digest)
            .unwrap_or(Digest::NULL);

        if self.config.index_policy == IndexPolicy::AssignPosition {
            block.index = self.blocks.len() as i64;
        }

        let serialized = block.serialize();
        block.self_digest = Block::compute_digest(&serialized);
        block
    }

    fn store(&mut self, block: Block, hooked: bool) -> &Block {
        debug!(
            position = self.blocks.len(),
            index = block.index,
            digest = %block.self_digest,
            previous = %block.previous_digest,
            hooked,
            "block appended"
        );
        let position = self.blocks.len();
        self.blocks.push(block);
        &self.blocks[position]
    }

    /// Run the integrity validator over the current blocks.
    pub fn validate(&self) -> FailureReport {
        validate_blocks(&self.blocks)
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The most recently appended block, if any.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Block at `position`, if present.
    pub fn get(&self, position: usize) -> Option<&Block> {
        self.blocks.get(position)
    }

    /// Block at `position`, or [`ChainError::BlockNotFound`].
    pub fn block(&self, position: usize) -> Result<&Block, ChainError> {
        self.blocks.get(position).ok_or(ChainError::BlockNotFound {
            index: position,
            len: self.blocks.len(),
        })
    }

    /// All blocks in append order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate blocks in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// The configuration this chain links with.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl Serialize for Chain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.blocks)
    }
}
