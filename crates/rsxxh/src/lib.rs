//! Pure Rust xxHash64.
//!
//! `rsxxh` computes the 64-bit xxHash of byte streams fed in arbitrary
//! chunks, with a 32-bit seed. Zero dependencies, `no_std` compatible, and
//! bit-for-bit identical to the reference XXH64 for every input.
//!
//! # Quick Start
//!
//! ```
//! use rsxxh::{FastHash, StreamingHash, Xxh64};
//!
//! // One-shot computation
//! let h = Xxh64::hash(b"xxhash");
//! assert_eq!(h, 0x32DD_3895_2C4B_C720);
//!
//! // Streaming computation; `digest` resets to the seeded state
//! let mut hasher = Xxh64::new();
//! hasher.update(b"xx");
//! hasher.update(b"hash");
//! assert_eq!(hasher.digest(), h);
//! assert_eq!(hasher.total_len(), 0);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `io::Read`/`io::Write` adapters and cached env overrides |
//! | `diag` | No | `Xxh64::selection_diag` kernel selection reports |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! rsxxh = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, kernel selection uses the built-in defaults only.
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Traits
// =============================================================================

pub use traits::{FastHash, SeedRangeError, StreamingHash};

// =============================================================================
// XXH64
// =============================================================================

#[cfg(feature = "diag")]
pub use hashes::fast::{SelectionReason, Xxh64SelectionDiag};
pub use hashes::fast::{Xxh64, Xxh64BuildHasher, Xxh64Config, Xxh64Force, Xxh64Tunables, xxh64};

/// Hashing `Read`/`Write` adapters.
#[cfg(feature = "std")]
pub mod io {
  pub use traits::io::{HashReader, HashWriter};
}
