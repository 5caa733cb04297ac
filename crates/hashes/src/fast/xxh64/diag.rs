//! Optional diagnostics for XXH64 kernel selection.
//!
//! Behind `cfg(feature = "diag")`; explains which stripe kernel a given input
//! length would run through and why, without touching the hashing hot path.

use super::{
  STRIPE_LEN,
  config::{self, Xxh64Force},
  kernels::{self, Xxh64KernelId},
};

/// Kernel name reported when an input never reaches the stripe loop.
pub const NO_KERNEL: &str = "none";

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// Shorter than one stripe; only the tail path runs.
  NoStripes,
  /// A forced mode was active.
  Forced,
  /// Below the stripe→unrolled threshold.
  BelowUnrolledThreshold,
  /// Normal auto selection.
  Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xxh64SelectionDiag {
  pub len: usize,
  pub reason: SelectionReason,
  pub requested_force: Xxh64Force,
  pub stripe_to_unrolled: usize,
  pub selected_kernel: &'static str,
}

/// One-shot selection for an input of `len` bytes.
#[must_use]
pub fn selection_diag(len: usize) -> Xxh64SelectionDiag {
  let cfg = config::get();
  let threshold = cfg.tunables.stripe_to_unrolled;
  let stripe_bytes = len - len % STRIPE_LEN;

  let (reason, selected_kernel) = if stripe_bytes == 0 {
    (SelectionReason::NoStripes, NO_KERNEL)
  } else {
    match cfg.force {
      Xxh64Force::Stripe => (SelectionReason::Forced, kernels::PORTABLE_STRIPE),
      Xxh64Force::Unrolled => (SelectionReason::Forced, kernels::PORTABLE_UNROLLED),
      Xxh64Force::Auto => match kernels::id_for_len(stripe_bytes, threshold) {
        Xxh64KernelId::Stripe => (SelectionReason::BelowUnrolledThreshold, kernels::PORTABLE_STRIPE),
        Xxh64KernelId::Unrolled => (SelectionReason::Auto, kernels::PORTABLE_UNROLLED),
      },
    }
  };

  Xxh64SelectionDiag {
    len,
    reason,
    requested_force: cfg.force,
    stripe_to_unrolled: threshold,
    selected_kernel,
  }
}
