//! Benchmark-only kernel accessors.
//!
//! Exposes each XXH64 stripe kernel as a one-shot function so benches can
//! compare them side by side, independent of `RSXXH_XXH64_*` overrides.
//! Production code should not depend on this API.

use crate::fast::xxh64::{
  self,
  kernels::{self, Xxh64KernelId},
};

#[derive(Clone, Copy)]
pub struct Kernel {
  pub name: &'static str,
  pub func: fn(&[u8], u32) -> u64,
}

fn xxh64_stripe(data: &[u8], seed: u32) -> u64 {
  xxh64::xxh64_with(kernels::stripes_fn(Xxh64KernelId::Stripe), data, seed)
}

fn xxh64_unrolled(data: &[u8], seed: u32) -> u64 {
  xxh64::xxh64_with(kernels::stripes_fn(Xxh64KernelId::Unrolled), data, seed)
}

const fn kernel(id: Xxh64KernelId) -> Kernel {
  Kernel {
    name: id.as_str(),
    func: match id {
      Xxh64KernelId::Stripe => xxh64_stripe,
      Xxh64KernelId::Unrolled => xxh64_unrolled,
    },
  }
}

/// Look up a kernel by its name (`portable/stripe`, `portable/unrolled`).
#[must_use]
pub fn get_kernel(name: &str) -> Option<Kernel> {
  kernels::id_from_name(name).map(kernel)
}

/// Every XXH64 kernel, in `kernels::ALL` order.
pub fn all_kernels() -> impl Iterator<Item = Kernel> {
  kernels::ALL.iter().copied().map(kernel)
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  #[test]
  fn every_kernel_matches_dispatch() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i.wrapping_mul(131) >> 3) as u8).collect();
    for len in [0usize, 31, 32, 127, 128, 129, 511, 512, 1000] {
      let input = &data[..len];
      for k in all_kernels() {
        assert_eq!((k.func)(input, 9), xxh64::xxh64(input, 9), "kernel={} len={len}", k.name);
      }
    }
  }

  #[test]
  fn lookup_by_name() {
    assert_eq!(get_kernel("portable/unrolled").map(|k| k.name), Some("portable/unrolled"));
    assert!(get_kernel("portable/auto").is_none());
    assert_eq!(all_kernels().count(), kernels::ALL.len());
  }
}
