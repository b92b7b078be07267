//! # Ledger Module
//!
//! The block type and the append-only chain that links blocks together.
//!
//! ```text
//! block.rs  — Block structure, canonical serialization, digest computation
//! chain.rs  — Single-owner chain: linking, hashing, optional hook, storage
//! shared.rs — Lock-protected chain handle for multi-threaded producers
//! ```
//!
//! Nothing here touches disk. A chain lives exactly as long as its owner.

pub mod block;
pub mod chain;
pub mod shared;

pub use block::Block;
pub use chain::Chain;
pub use shared::SharedChain;
