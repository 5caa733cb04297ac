//! Differential fuzzing of XXH64 against `xxhash-rust`.

#![no_main]

use hashes::fast::{Xxh64, xxh64};
use libfuzzer_sys::fuzz_target;
use traits::{FastHash as _, StreamingHash as _};

fuzz_target!(|input: &[u8]| {
  let (seed_bytes, data) = input.split_at(core::cmp::min(4, input.len()));
  let mut seed = 0u32;
  for (i, &b) in seed_bytes.iter().enumerate() {
    seed |= u32::from(b) << (i * 8);
  }

  let ours = xxh64(data, seed);
  let reference = xxhash_rust::xxh64::xxh64(data, u64::from(seed));
  assert_eq!(
    ours,
    reference,
    "XXH64 differential mismatch: ours={ours:#018x}, reference={reference:#018x}, seed={seed}, len={}",
    data.len()
  );

  assert_eq!(Xxh64::hash_with_seed(seed, data), ours);

  let mut h = Xxh64::with_seed(seed);
  h.update(data);
  assert_eq!(h.digest(), ours, "XXH64 self-consistency mismatch");
});
