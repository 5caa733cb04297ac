//! XXH64 (**NOT CRYPTO**).
//!
//! The 64-bit xxHash: four independent 64-bit lanes mixed over 32-byte
//! stripes, a 0–31 byte stream buffer carried between `update` calls, and a
//! tail + avalanche finalization. Output is bit-for-bit identical to the
//! reference implementation for every input and every 32-bit seed.
//!
//! # Quick Start
//!
//! ```rust
//! use hashes::{FastHash, StreamingHash, fast::Xxh64};
//!
//! let data = b"Nobody inspects the spammish repetition";
//! assert_eq!(Xxh64::hash(data), 0xFBCE_A83C_8A37_8BF1);
//!
//! let mut h = Xxh64::new();
//! for chunk in data.chunks(5) {
//!   h.update(chunk);
//! }
//! assert_eq!(h.digest(), Xxh64::hash(data));
//! ```
//!
//! # State Machine
//!
//! `with_seed` → (`update`)* → `digest` → back to the freshly seeded state.
//! [`finalize`](traits::StreamingHash::finalize) peeks at the digest without
//! resetting.

#![allow(clippy::indexing_slicing)] // Buffer bookkeeping; offsets are bounded by `STRIPE_LEN`

use core::hash::{BuildHasher, Hasher};

use traits::{FastHash, SeedRangeError, StreamingHash};

pub(crate) mod config;
#[cfg(feature = "diag")]
mod diag;
pub(crate) mod dispatch;
pub(crate) mod kernels;

pub use config::{Xxh64Config, Xxh64Force, Xxh64Tunables};
#[cfg(feature = "diag")]
pub use diag::{SelectionReason, Xxh64SelectionDiag};

const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9;
const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63;
const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5;

/// Bytes consumed by one round of all four lanes.
pub const STRIPE_LEN: usize = 32;
const LANES: usize = 4;
const WORD_LEN: usize = 8;

type Lanes = [u64; LANES];

/// Bulk stripe kernel: mixes whole stripes into the lanes, in order.
pub(crate) type StripesFn = fn(&mut Lanes, &[[u8; STRIPE_LEN]]);

// ─────────────────────────────────────────────────────────────────────────────
// Mixing primitives
// ─────────────────────────────────────────────────────────────────────────────

#[inline(always)]
const fn round(acc: u64, input: u64) -> u64 {
  acc
    .wrapping_add(input.wrapping_mul(PRIME64_2))
    .rotate_left(31)
    .wrapping_mul(PRIME64_1)
}

#[inline(always)]
const fn merge_round(acc: u64, lane: u64) -> u64 {
  (acc ^ round(0, lane)).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4)
}

#[inline(always)]
const fn avalanche(mut h: u64) -> u64 {
  h ^= h >> 33;
  h = h.wrapping_mul(PRIME64_2);
  h ^= h >> 29;
  h = h.wrapping_mul(PRIME64_3);
  h ^= h >> 32;
  h
}

#[inline(always)]
const fn init_lanes(seed: u32) -> Lanes {
  let seed = seed as u64;
  [
    seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
    seed.wrapping_add(PRIME64_2),
    seed,
    seed.wrapping_sub(PRIME64_1),
  ]
}

#[inline(always)]
fn load_words(stripe: &[u8; STRIPE_LEN]) -> Lanes {
  let mut words = [0u64; LANES];
  let (chunks, _) = stripe.as_chunks::<WORD_LEN>();
  for (word, chunk) in words.iter_mut().zip(chunks) {
    *word = u64::from_le_bytes(*chunk);
  }
  words
}

#[inline(always)]
fn mix_stripe(lanes: &mut Lanes, stripe: &[u8; STRIPE_LEN]) {
  for (lane, word) in lanes.iter_mut().zip(load_words(stripe)) {
    *lane = round(*lane, word);
  }
}

/// `portable/stripe`: one stripe per iteration.
fn mix_stripes(lanes: &mut Lanes, stripes: &[[u8; STRIPE_LEN]]) {
  for stripe in stripes {
    mix_stripe(lanes, stripe);
  }
}

/// `portable/unrolled`: lanes in locals, 128 bytes per iteration.
///
/// All sixteen words of a four-stripe group are loaded up front, then each
/// lane runs its four rounds back to back. Lanes carry no dependency on each
/// other, so the four chains can be scheduled in parallel.
fn mix_stripes_unrolled(lanes: &mut Lanes, stripes: &[[u8; STRIPE_LEN]]) {
  let [mut v1, mut v2, mut v3, mut v4] = *lanes;

  let (groups, rest) = stripes.as_chunks::<4>();
  for [s0, s1, s2, s3] in groups {
    let [a1, a2, a3, a4] = load_words(s0);
    let [b1, b2, b3, b4] = load_words(s1);
    let [c1, c2, c3, c4] = load_words(s2);
    let [d1, d2, d3, d4] = load_words(s3);

    v1 = round(round(round(round(v1, a1), b1), c1), d1);
    v2 = round(round(round(round(v2, a2), b2), c2), d2);
    v3 = round(round(round(round(v3, a3), b3), c3), d3);
    v4 = round(round(round(round(v4, a4), b4), c4), d4);
  }

  *lanes = [v1, v2, v3, v4];
  mix_stripes(lanes, rest);
}

#[inline(always)]
fn converge(lanes: &Lanes) -> u64 {
  let [v1, v2, v3, v4] = *lanes;
  let mut h = v1
    .rotate_left(1)
    .wrapping_add(v2.rotate_left(7))
    .wrapping_add(v3.rotate_left(12))
    .wrapping_add(v4.rotate_left(18));
  for lane in [v1, v2, v3, v4] {
    h = merge_round(h, lane);
  }
  h
}

/// Drains up to 31 trailing bytes into `h`, then avalanches.
#[inline(always)]
fn finish(mut h: u64, tail: &[u8]) -> u64 {
  let (words, rest) = tail.as_chunks::<WORD_LEN>();
  for word in words {
    h ^= round(0, u64::from_le_bytes(*word));
    h = h.rotate_left(27).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4);
  }

  let (halves, rest) = rest.as_chunks::<4>();
  for half in halves {
    h ^= u64::from(u32::from_le_bytes(*half)).wrapping_mul(PRIME64_1);
    h = h.rotate_left(23).wrapping_mul(PRIME64_2).wrapping_add(PRIME64_3);
  }

  for &byte in rest {
    h ^= u64::from(byte).wrapping_mul(PRIME64_5);
    h = h.rotate_left(11).wrapping_mul(PRIME64_1);
  }

  avalanche(h)
}

/// One-shot XXH64 of `data` with `seed`.
///
/// Equivalent to feeding `data` to [`Xxh64::with_seed`] in any number of
/// chunks and calling `finalize`, without copying through the stream buffer.
#[must_use]
pub fn xxh64(data: &[u8], seed: u32) -> u64 {
  let stripe_bytes = data.len() - data.len() % STRIPE_LEN;
  xxh64_with(dispatch::stripes_fn_for_len(stripe_bytes), data, seed)
}

/// One-shot XXH64 through a specific stripe kernel.
#[inline]
pub(crate) fn xxh64_with(stripes_fn: StripesFn, data: &[u8], seed: u32) -> u64 {
  let (stripes, tail) = data.as_chunks::<STRIPE_LEN>();

  let h = if stripes.is_empty() {
    u64::from(seed).wrapping_add(PRIME64_5)
  } else {
    let mut lanes = init_lanes(seed);
    stripes_fn(&mut lanes, stripes);
    converge(&lanes)
  };

  finish(h.wrapping_add(data.len() as u64), tail)
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming state
// ─────────────────────────────────────────────────────────────────────────────

/// XXH64 hasher.
///
/// Holds the four lanes, the running input length, and up to 31 bytes not yet
/// mixed. Not shareable between threads while hashing; hash independent
/// inputs with independent instances (`Clone` forks a state).
///
/// # Examples
///
/// ```rust
/// use hashes::{StreamingHash, fast::Xxh64};
///
/// let mut h = Xxh64::with_seed(20141025);
/// h.update(b"xx");
/// h.update(b"hash");
/// assert_eq!(h.digest(), 0xB559_B98D_844E_0635);
///
/// // Same instance, same seed, fresh input.
/// h.update(b"xxhash");
/// assert_eq!(h.digest(), 0xB559_B98D_844E_0635);
/// ```
#[derive(Clone, Debug)]
pub struct Xxh64 {
  seed: u32,
  lanes: Lanes,
  total_len: u64,
  buf: [u8; STRIPE_LEN],
  buf_len: usize,
}

impl Xxh64 {
  /// Create a hasher seeded with `seed`.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u32) -> Self {
    Self {
      seed,
      lanes: init_lanes(seed),
      total_len: 0,
      buf: [0; STRIPE_LEN],
      buf_len: 0,
    }
  }

  /// Create a hasher from any integer seed, rejecting values outside `u32`.
  ///
  /// ```rust
  /// use hashes::fast::Xxh64;
  ///
  /// assert!(Xxh64::try_with_seed(7u64).is_ok());
  /// assert!(Xxh64::try_with_seed(-1i64).is_err());
  /// assert!(Xxh64::try_with_seed(1u64 << 32).is_err());
  /// ```
  #[inline]
  pub fn try_with_seed<S: TryInto<u32>>(seed: S) -> Result<Self, SeedRangeError> {
    seed
      .try_into()
      .map(Self::with_seed)
      .map_err(|_| SeedRangeError::new())
  }

  /// Total bytes fed since construction or the last reset.
  #[inline]
  #[must_use]
  pub const fn total_len(&self) -> u64 {
    self.total_len
  }

  /// Bytes currently held in the stream buffer (always `< 32`).
  #[inline]
  #[must_use]
  pub const fn buffered_len(&self) -> usize {
    self.buf_len
  }

  /// Feed `data` and hand the hasher back, for builder-style chaining.
  #[inline]
  #[must_use]
  pub fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
    StreamingHash::update(&mut self, data.as_ref());
    self
  }

  /// Get the effective XXH64 configuration.
  #[must_use]
  pub fn config() -> Xxh64Config {
    config::get()
  }

  /// Convenience accessor for the active XXH64 tunables.
  #[must_use]
  pub fn tunables() -> Xxh64Tunables {
    Self::config().tunables
  }

  /// Name of the stripe kernel used for `len` bytes of whole-stripe input.
  #[must_use]
  pub fn kernel_name_for_len(len: usize) -> &'static str {
    dispatch::kernel_name_for_len(len)
  }

  /// Name of the selection mode (`portable/auto` unless forced).
  #[must_use]
  pub fn backend_name() -> &'static str {
    dispatch::backend_name()
  }

  /// Explain the kernel selection for a one-shot input of `len` bytes.
  #[cfg(feature = "diag")]
  #[must_use]
  pub fn selection_diag(len: usize) -> Xxh64SelectionDiag {
    diag::selection_diag(len)
  }
}

impl Default for Xxh64 {
  #[inline]
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl StreamingHash for Xxh64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u32;

  #[inline]
  fn with_seed(seed: u32) -> Self {
    Self::with_seed(seed)
  }

  #[inline]
  fn seed(&self) -> u32 {
    self.seed
  }

  fn update(&mut self, data: &[u8]) {
    if data.is_empty() {
      return;
    }
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    let pending = self.buf_len;
    if pending + data.len() < STRIPE_LEN {
      self.buf[pending..pending + data.len()].copy_from_slice(data);
      self.buf_len += data.len();
      return;
    }

    let mut input = data;
    if pending > 0 {
      let (head, rest) = input.split_at(STRIPE_LEN - pending);
      self.buf[pending..].copy_from_slice(head);
      mix_stripe(&mut self.lanes, &self.buf);
      self.buf_len = 0;
      input = rest;
    }

    let (stripes, tail) = input.as_chunks::<STRIPE_LEN>();
    if !stripes.is_empty() {
      dispatch::stripes_fn_for_len(stripes.len() * STRIPE_LEN)(&mut self.lanes, stripes);
    }

    self.buf[..tail.len()].copy_from_slice(tail);
    self.buf_len = tail.len();
  }

  fn finalize(&self) -> u64 {
    let h = if self.total_len >= STRIPE_LEN as u64 {
      converge(&self.lanes)
    } else {
      u64::from(self.seed).wrapping_add(PRIME64_5)
    };
    finish(h.wrapping_add(self.total_len), &self.buf[..self.buf_len])
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::with_seed(self.seed);
  }
}

impl FastHash for Xxh64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u64 {
    xxh64(data, seed)
  }
}

/// `Hasher` view: `write` feeds bytes, `finish` peeks without resetting.
///
/// Integer writes use the platform's native byte order (the `Hasher`
/// defaults), so digests of non-byte keys are not portable across endianness.
impl Hasher for Xxh64 {
  #[inline]
  fn finish(&self) -> u64 {
    StreamingHash::finalize(self)
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    StreamingHash::update(self, bytes);
  }
}

/// [`BuildHasher`] producing seeded [`Xxh64`] hashers.
///
/// ```rust
/// use std::collections::HashMap;
///
/// use hashes::fast::Xxh64BuildHasher;
///
/// let mut map: HashMap<&str, u32, Xxh64BuildHasher> = HashMap::with_hasher(Xxh64BuildHasher::with_seed(42));
/// map.insert("answer", 42);
/// assert_eq!(map.get("answer"), Some(&42));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Xxh64BuildHasher {
  seed: u32,
}

impl Xxh64BuildHasher {
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u32) -> Self {
    Self { seed }
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u32 {
    self.seed
  }
}

impl BuildHasher for Xxh64BuildHasher {
  type Hasher = Xxh64;

  #[inline]
  fn build_hasher(&self) -> Xxh64 {
    Xxh64::with_seed(self.seed)
  }
}

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;
