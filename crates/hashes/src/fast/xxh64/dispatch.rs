use super::{
  StripesFn,
  config::{self, Xxh64Force},
  kernels::{self, Xxh64KernelId},
};

#[derive(Clone, Copy)]
struct ActiveDispatch {
  force: Xxh64Force,
  stripe_to_unrolled: usize,
}

impl ActiveDispatch {
  fn from_config() -> Self {
    let cfg = config::get();
    Self {
      force: cfg.force,
      stripe_to_unrolled: cfg.tunables.stripe_to_unrolled,
    }
  }

  #[inline]
  fn select(self, len: usize) -> Xxh64KernelId {
    match self.force {
      Xxh64Force::Stripe => Xxh64KernelId::Stripe,
      Xxh64Force::Unrolled => Xxh64KernelId::Unrolled,
      Xxh64Force::Auto => kernels::id_for_len(len, self.stripe_to_unrolled),
    }
  }
}

#[cfg(feature = "std")]
#[inline]
#[must_use]
fn active() -> ActiveDispatch {
  use std::sync::OnceLock;
  static ACTIVE: OnceLock<ActiveDispatch> = OnceLock::new();
  *ACTIVE.get_or_init(ActiveDispatch::from_config)
}

#[cfg(not(feature = "std"))]
#[inline]
#[must_use]
fn active() -> ActiveDispatch {
  ActiveDispatch::from_config()
}

/// Stripe kernel for `len` bytes of whole-stripe input.
#[inline]
#[must_use]
pub fn stripes_fn_for_len(len: usize) -> StripesFn {
  kernels::stripes_fn(active().select(len))
}

#[inline]
#[must_use]
pub fn kernel_name_for_len(len: usize) -> &'static str {
  active().select(len).as_str()
}

#[inline]
#[must_use]
pub fn backend_name() -> &'static str {
  match active().force {
    Xxh64Force::Stripe => kernels::PORTABLE_STRIPE,
    Xxh64Force::Unrolled => kernels::PORTABLE_UNROLLED,
    Xxh64Force::Auto => kernels::PORTABLE_AUTO,
  }
}
