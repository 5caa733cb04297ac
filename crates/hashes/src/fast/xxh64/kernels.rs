//! Kernel identifiers and name tables for XXH64.
//!
//! Keeps kernel names in one place so dispatch, introspection, and
//! diagnostics share identifiers.

use super::StripesFn;

/// One stripe per iteration over the lane array.
pub const PORTABLE_STRIPE: &str = "portable/stripe";
/// Lanes held in locals, four stripes per iteration.
pub const PORTABLE_UNROLLED: &str = "portable/unrolled";
/// Auto selection (stripe vs unrolled by length).
pub const PORTABLE_AUTO: &str = "portable/auto";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Xxh64KernelId {
  Stripe = 0,
  Unrolled = 1,
}

/// All kernels, ordered by increasing work per iteration.
pub const ALL: &[Xxh64KernelId] = &[Xxh64KernelId::Stripe, Xxh64KernelId::Unrolled];

impl Xxh64KernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Stripe => PORTABLE_STRIPE,
      Self::Unrolled => PORTABLE_UNROLLED,
    }
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<Xxh64KernelId> {
  ALL.iter().copied().find(|id| id.as_str() == name)
}

#[must_use]
pub fn stripes_fn(id: Xxh64KernelId) -> StripesFn {
  match id {
    Xxh64KernelId::Stripe => super::mix_stripes,
    Xxh64KernelId::Unrolled => super::mix_stripes_unrolled,
  }
}

/// Auto choice for `len` bytes of whole-stripe input.
#[inline]
#[must_use]
pub const fn id_for_len(len: usize, stripe_to_unrolled: usize) -> Xxh64KernelId {
  if len < stripe_to_unrolled {
    Xxh64KernelId::Stripe
  } else {
    Xxh64KernelId::Unrolled
  }
}
