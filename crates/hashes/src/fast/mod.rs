//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these hashes
//! for signatures, MACs, key derivation, or anything requiring cryptographic
//! security.

pub mod xxh64;

#[cfg(feature = "diag")]
pub use xxh64::{SelectionReason, Xxh64SelectionDiag};
pub use xxh64::{Xxh64, Xxh64BuildHasher, Xxh64Config, Xxh64Force, Xxh64Tunables, xxh64};
