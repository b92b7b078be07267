// Copyright (c) 2026 Linkchain Developers. MIT License.
// See LICENSE for details.

//! # linkchain — Tamper-Evident Block Chain
//!
//! An append-only sequence of blocks where every block commits to its
//! predecessor's digest. Rewrite any stored block and the link after it stops
//! matching. A separate validator walks the chain and reports each kind of
//! breakage as its own flag.
//!
//! ## Architecture
//!
//! - **crypto** — The 20-byte `Digest` type and the SHA-1 function behind it.
//! - **ledger** — `Block`, the append-only `Chain`, and a lock-protected
//!   `SharedChain` for multi-threaded producers.
//! - **validation** — The read-only scan and its independent-flags report.
//! - **config** — Format constants and `ChainConfig`.
//! - **error** — `ChainError` for the few fallible edges.
//!
//! ## Example
//!
//! ```
//! use linkchain::{Block, Chain, Digest, FailureDimension};
//!
//! let mut chain = Chain::new();
//! let a = chain.append(Block::new("x")).self_digest;
//! let b = chain.append(Block::new("y")).previous_digest;
//! assert_eq!(a, b);
//! assert!(chain.validate().is_clean());
//!
//! let mut forged = Chain::new();
//! forged.append_with(Block::new("x"), |b| b.previous_digest = Digest::filled(0xFF));
//! assert!(forged.validate().contains(FailureDimension::CorruptedGenesis));
//! ```
//!
//! Single owner, in memory. No persistence, networking or consensus.

pub mod config;
pub mod crypto;
pub mod error;
pub mod ledger;
pub mod validation;

pub use config::{ChainConfig, IndexPolicy};
pub use crypto::Digest;
pub use error::ChainError;
pub use ledger::{Block, Chain, SharedChain};
pub use validation::{find_faults, validate, FailureDimension, FailureReport, Fault};
