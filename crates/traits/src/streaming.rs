//! Incremental hashing trait.
//!
//! - **Streaming**: bytes may arrive in any number of chunks of any size
//! - **Reusable**: [`digest`](StreamingHash::digest) hands back the result and
//!   rewinds the state to its freshly-seeded form
//! - **I/O**: reader/writer adapters hash bytes as they move

use core::fmt::Debug;

/// Non-cryptographic hash that can be fed incrementally.
///
/// # Usage
///
/// ```rust,ignore
/// use hashes::{StreamingHash, fast::Xxh64};
///
/// // One-shot
/// let h = Xxh64::hash_chunks(7, &[b"hello world"]);
///
/// // Streaming
/// let mut hasher = Xxh64::with_seed(7);
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.digest(), h);
///
/// // `digest` reset the state; the same instance hashes the next input.
/// hasher.update(b"hello world");
/// assert_eq!(hasher.digest(), h);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `with_seed(Seed::default())`
/// - the digest must not depend on how the input was split into `update` calls
/// - `finalize()` must not change the state
/// - `reset()` must restore the state produced by `with_seed` with the current seed
pub trait StreamingHash: Clone {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Create a hasher with the default seed.
  #[inline]
  #[must_use]
  fn new() -> Self {
    Self::with_seed(Self::Seed::default())
  }

  /// Create a hasher with `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// The seed this hasher resets to.
  #[must_use]
  fn seed(&self) -> Self::Seed;

  /// Feed more input. Empty slices are a no-op.
  fn update(&mut self, data: &[u8]);

  /// Feed several non-contiguous buffers, in order.
  ///
  /// Identical to calling [`update`](Self::update) on each buffer.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Feed `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Compute the hash of everything fed so far, leaving the state untouched.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Restore the freshly-seeded state.
  fn reset(&mut self);

  /// Compute the hash of everything fed so far, then [`reset`](Self::reset).
  ///
  /// The instance is immediately ready to hash a new input with the same seed.
  #[inline]
  #[must_use = "digest resets the hasher; dropping the result loses it"]
  fn digest(&mut self) -> Self::Output {
    let out = self.finalize();
    self.reset();
    out
  }

  /// Hash a sequence of chunks as one logical input.
  #[inline]
  #[must_use]
  fn hash_chunks(seed: Self::Seed, chunks: &[&[u8]]) -> Self::Output {
    let mut h = Self::with_seed(seed);
    h.update_vectored(chunks);
    h.finalize()
  }

  /// Wrap a reader to hash everything read through it.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use hashes::{StreamingHash, fast::Xxh64};
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = Xxh64::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("xxh64: {:016x}", reader.hash());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::HashReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::HashReader::new(inner)
  }

  /// Wrap a writer to hash everything written through it.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner)
  }
}
