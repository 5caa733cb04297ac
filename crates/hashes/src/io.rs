//! I/O adapters for streaming hashes.
//!
//! [`HashReader`] and [`HashWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and hash exactly the bytes transferred.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "std")]
//! # {
//! use std::io::Write;
//!
//! use hashes::{FastHash, StreamingHash, fast::Xxh64};
//!
//! let mut writer = Xxh64::writer(Vec::new());
//! writer.write_all(b"hello world")?;
//! let (out, hash) = writer.into_parts();
//! assert_eq!(hash, Xxh64::hash(&out));
//! # }
//! # Ok::<(), std::io::Error>(())
//! ```

#[cfg(feature = "std")]
pub use traits::io::{HashReader, HashWriter};
