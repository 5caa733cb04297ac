//! One-shot non-cryptographic hash trait (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash computed over a complete input.
///
/// Suitable for hash-table keys, checksums, and content fingerprints in
/// non-adversarial settings. **Not** suitable for signatures, MACs, password
/// hashing, or untrusted inputs where collision attacks matter.
///
/// For inputs that arrive in pieces, use the algorithm's
/// [`StreamingHash`](crate::StreamingHash) implementation instead; both paths
/// must agree on every input.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type. `Seed::default()` is the algorithm's unseeded variant.
  type Seed: Copy + Debug + Default;

  /// Hash `data` with the default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Hash `data` with `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
