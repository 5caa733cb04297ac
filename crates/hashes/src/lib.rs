//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the rsxxh workspace. Dev-only dependencies are used for oracle testing,
//! fuzzing, and benchmarking.
//!
//! # Algorithms
//!
//! - [`fast::Xxh64`] - xxHash64, one-shot and streaming, 32-bit seed
//!
//! # Example
//!
//! ```rust
//! use hashes::{FastHash, StreamingHash, fast::Xxh64};
//!
//! let oneshot = Xxh64::hash(b"abc");
//! assert_eq!(oneshot, 0x44BC_2CF5_AD77_0999);
//!
//! let mut hasher = Xxh64::new();
//! hasher.update(b"a");
//! hasher.update(b"bc");
//! assert_eq!(hasher.digest(), oneshot);
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[doc(hidden)]
pub mod bench;
pub mod fast;
pub mod io;

pub use traits::{FastHash, SeedRangeError, StreamingHash};
