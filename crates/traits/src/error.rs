//! Error types for hashing operations.
//!
//! The hash algorithms themselves are total: every byte sequence and every
//! in-range seed is valid input. Errors only arise at the boundary where a
//! caller converts its own values into algorithm parameters.

use core::fmt;

/// A seed could not be represented in the algorithm's seed width.
///
/// Returned by fallible seed constructors (e.g. `Xxh64::try_with_seed`) when
/// the caller's value is negative or wider than the seed type.
///
/// # Examples
///
/// ```
/// use traits::SeedRangeError;
///
/// fn narrow(seed: u64) -> Result<u32, SeedRangeError> {
///   u32::try_from(seed).map_err(|_| SeedRangeError::new())
/// }
///
/// assert_eq!(narrow(7), Ok(7));
/// assert!(narrow(u64::MAX).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct SeedRangeError;

impl SeedRangeError {
  /// Create a new seed range error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for SeedRangeError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for SeedRangeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("seed out of range")
  }
}

impl core::error::Error for SeedRangeError {}
