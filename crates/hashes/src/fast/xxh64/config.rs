//! XXH64 runtime configuration (overrides + thresholds).
//!
//! XXH64 is portable-only. The knobs here choose between the two portable
//! stripe kernels, which produce identical lanes:
//! - optional forced kernel selection
//! - the input length where the unrolled kernel takes over
//!
//! With `std`, `RSXXH_XXH64_*` environment variables are read once and cached.

/// Forced kernel selection for XXH64.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Xxh64Force {
  /// Pick by input length.
  #[default]
  Auto,
  /// Always mix one stripe at a time.
  Stripe,
  /// Always use the four-stripe unrolled loop.
  Unrolled,
}

impl Xxh64Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Stripe => "stripe",
      Self::Unrolled => "unrolled",
    }
  }
}

/// XXH64 selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xxh64Tunables {
  /// Bytes of stripe input at which the unrolled kernel becomes faster.
  pub stripe_to_unrolled: usize,
}

impl Default for Xxh64Tunables {
  fn default() -> Self {
    Self {
      stripe_to_unrolled: DEFAULT_STRIPE_TO_UNROLLED,
    }
  }
}

/// Effective XXH64 configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Xxh64Config {
  /// Requested force mode.
  pub force: Xxh64Force,
  /// Thresholds used by the auto selector.
  pub tunables: Xxh64Tunables,
}

/// Four unrolled iterations (4 x 128 bytes).
const DEFAULT_STRIPE_TO_UNROLLED: usize = 512;

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Xxh64Force,
  stripe_to_unrolled: Option<usize>,
}

#[cfg(feature = "std")]
fn parse_force(value: &str) -> Option<Xxh64Force> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  if value.eq_ignore_ascii_case("auto") {
    return Some(Xxh64Force::Auto);
  }
  if value.eq_ignore_ascii_case("stripe")
    || value.eq_ignore_ascii_case("scalar")
    || value.eq_ignore_ascii_case("portable")
  {
    return Some(Xxh64Force::Stripe);
  }
  if value.eq_ignore_ascii_case("unrolled") || value.eq_ignore_ascii_case("x4") {
    return Some(Xxh64Force::Unrolled);
  }

  None
}

#[cfg(feature = "std")]
fn parse_usize(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<usize>().ok()
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  let env = |name: &str| std::env::var(name).ok();

  Overrides {
    force: env("RSXXH_XXH64_FORCE")
      .as_deref()
      .and_then(parse_force)
      .unwrap_or(Xxh64Force::Auto),
    stripe_to_unrolled: env("RSXXH_XXH64_THRESHOLD_STRIPE_TO_UNROLLED")
      .as_deref()
      .and_then(parse_usize),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

fn resolve(ov: Overrides) -> Xxh64Config {
  let mut tunables = Xxh64Tunables::default();
  if let Some(v) = ov.stripe_to_unrolled {
    tunables.stripe_to_unrolled = v;
  }
  Xxh64Config {
    force: ov.force,
    tunables,
  }
}

/// Effective configuration:
/// - defaults
/// - env var overrides (`RSXXH_XXH64_*`) when `std` is enabled
#[inline]
#[must_use]
pub(crate) fn get() -> Xxh64Config {
  resolve(overrides())
}
