extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use super::*;

/// Straight-line XXH64: byte-at-a-time word assembly, no buffering, no kernels.
fn xxh64_reference(data: &[u8], seed: u32) -> u64 {
  fn word_le(bytes: &[u8]) -> u64 {
    bytes
      .iter()
      .rev()
      .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
  }

  let seed = u64::from(seed);
  let len = data.len();
  let mut p = 0usize;

  let mut h = if len >= 32 {
    let mut v = [
      seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
      seed.wrapping_add(PRIME64_2),
      seed,
      seed.wrapping_sub(PRIME64_1),
    ];
    while p + 32 <= len {
      for (i, lane) in v.iter_mut().enumerate() {
        let w = word_le(&data[p + 8 * i..p + 8 * i + 8]);
        *lane = lane
          .wrapping_add(w.wrapping_mul(PRIME64_2))
          .rotate_left(31)
          .wrapping_mul(PRIME64_1);
      }
      p += 32;
    }
    let mut h = v[0]
      .rotate_left(1)
      .wrapping_add(v[1].rotate_left(7))
      .wrapping_add(v[2].rotate_left(12))
      .wrapping_add(v[3].rotate_left(18));
    for lane in v {
      let k = lane.wrapping_mul(PRIME64_2).rotate_left(31).wrapping_mul(PRIME64_1);
      h = (h ^ k).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4);
    }
    h
  } else {
    seed.wrapping_add(PRIME64_5)
  };

  h = h.wrapping_add(len as u64);

  while p + 8 <= len {
    let k = word_le(&data[p..p + 8])
      .wrapping_mul(PRIME64_2)
      .rotate_left(31)
      .wrapping_mul(PRIME64_1);
    h = (h ^ k).rotate_left(27).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4);
    p += 8;
  }
  if p + 4 <= len {
    let k = word_le(&data[p..p + 4]).wrapping_mul(PRIME64_1);
    h = (h ^ k).rotate_left(23).wrapping_mul(PRIME64_2).wrapping_add(PRIME64_3);
    p += 4;
  }
  while p < len {
    h = (h ^ u64::from(data[p]).wrapping_mul(PRIME64_5))
      .rotate_left(11)
      .wrapping_mul(PRIME64_1);
    p += 1;
  }

  h ^= h >> 33;
  h = h.wrapping_mul(PRIME64_2);
  h ^= h >> 29;
  h = h.wrapping_mul(PRIME64_3);
  h ^ (h >> 32)
}

/// Cut `data` at the (sorted, clamped) `cuts`, keeping empty pieces.
fn partition<'a>(data: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
  let mut cuts: Vec<usize> = cuts.iter().map(|c| c % (data.len() + 1)).collect();
  cuts.sort_unstable();

  let mut parts = Vec::with_capacity(cuts.len() + 1);
  let mut start = 0;
  for cut in cuts {
    parts.push(&data[start..cut]);
    start = cut;
  }
  parts.push(&data[start..]);
  parts
}

proptest! {
  #[test]
  fn xxh64_matches_reference(seed in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
    prop_assert_eq!(xxh64(&data, seed), xxh64_reference(&data, seed));
  }

  #[test]
  fn xxh64_any_partition_matches_oneshot(
    seed in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    cuts in proptest::collection::vec(any::<usize>(), 0..=16)
  ) {
    let oneshot = xxh64(&data, seed);

    let mut h = Xxh64::with_seed(seed);
    for part in partition(&data, &cuts) {
      h.update(part);
      prop_assert!(h.buffered_len() < STRIPE_LEN);
    }
    prop_assert_eq!(h.total_len(), data.len() as u64);
    prop_assert_eq!(h.digest(), oneshot);

    // Reused instance starts clean.
    h.update(&data);
    prop_assert_eq!(h.digest(), oneshot);
  }

  #[test]
  fn xxh64_fixed_chunks_match_oneshot(
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    chunk in 1usize..=97
  ) {
    let mut h = Xxh64::new();
    for part in data.chunks(chunk) {
      h.update(part);
    }
    prop_assert_eq!(h.finalize(), xxh64(&data, 0));
  }

  #[test]
  fn xxh64_kernels_agree(seed in any::<u32>(), stripes in proptest::collection::vec(proptest::array::uniform32(any::<u8>()), 0..=40)) {
    let mut expected = init_lanes(seed);
    for stripe in &stripes {
      mix_stripe(&mut expected, stripe);
    }

    for &id in kernels::ALL {
      let mut lanes = init_lanes(seed);
      kernels::stripes_fn(id)(&mut lanes, &stripes);
      prop_assert_eq!(lanes, expected, "kernel={}", id.as_str());
    }
  }
}
