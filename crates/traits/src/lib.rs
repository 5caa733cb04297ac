//! Core hashing traits for rsxxh.
//!
//! This crate provides the traits that the rsxxh hash implementations conform
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot non-cryptographic hashing | xxHash64 |
//! | [`StreamingHash`] | Incremental hashing with a reusable state | xxHash64 |
//!
//! # Error Types
//!
//! - [`SeedRangeError`] - A seed did not fit the algorithm's seed width
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
pub mod io;
mod streaming;

pub use error::SeedRangeError;
pub use fast_hash::FastHash;
pub use streaming::StreamingHash;
