//! I/O adapters for streaming hashes.
//!
//! [`HashReader`] and [`HashWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] and feed every transferred byte into a
//! [`StreamingHash`](crate::StreamingHash). Only bytes that actually moved are
//! hashed, so short reads and short writes are accounted for exactly.
//!
//! Both adapters require the `std` feature; without it this module is empty.

#[cfg(feature = "std")]
use crate::StreamingHash;

#[cfg(feature = "std")]
#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      continue;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn write_vectored_and_update<W>(
  inner: &mut W,
  bufs: &[std::io::IoSlice<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      continue;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

/// Wraps a [`Read`](std::io::Read) and hashes every byte read through it.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `H`: The streaming hash (e.g. `Xxh64`)
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct HashReader<R, H: StreamingHash> {
  inner: R,
  hasher: H,
}

#[cfg(feature = "std")]
impl<R, H: StreamingHash> HashReader<R, H> {
  /// Create a reader wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Create a reader wrapper with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: R, seed: H::Seed) -> Self {
    Self {
      inner,
      hasher: H::with_seed(seed),
    }
  }

  /// Hash of everything read so far. Further reads keep extending it.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Mutable access to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap into the inner reader and the hash of everything read.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap into the inner reader, discarding the hash.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<R: std::io::Read, H: StreamingHash> std::io::Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and hashes every byte written through it.
///
/// Only the prefix the inner writer accepted is hashed, so a short write
/// followed by a retry of the remainder hashes each byte exactly once.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct HashWriter<W, H: StreamingHash> {
  inner: W,
  hasher: H,
}

#[cfg(feature = "std")]
impl<W, H: StreamingHash> HashWriter<W, H> {
  /// Create a writer wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Create a writer wrapper with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: W, seed: H::Seed) -> Self {
    Self {
      inner,
      hasher: H::with_seed(seed),
    }
  }

  /// Hash of everything written so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap into the inner writer and the hash of everything written.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<W: std::io::Write, H: StreamingHash> std::io::Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}
