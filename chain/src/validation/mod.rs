//! # Validation Module
//!
//! Read-only integrity checks over a chain snapshot. Validation never
//! mutates a chain and never fails: it always returns a report, and an
//! empty chain is simply clean.

pub mod report;
pub mod validator;

pub use report::{FailureDimension, FailureReport};
pub use validator::{find_faults, validate, validate_blocks, Fault};
