//! Cryptographic utilities for the audit attestor
//!
//! Provides deterministic proof-input derivation: keccak-256 content
//! hashing of contract source and analysis results, and the combined
//! digest submitted as the proof value.

mod derive;

pub use derive::*;
