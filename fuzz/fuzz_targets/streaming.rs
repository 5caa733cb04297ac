//! Fuzz target for the streaming XXH64 API.
//!
//! Arbitrary update sequences, including empty chunks, must match one-shot,
//! and `digest` must leave the hasher equivalent to a fresh one.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::{Xxh64, xxh64};
use libfuzzer_sys::fuzz_target;
use traits::StreamingHash as _;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates; zero feeds an empty slice.
  chunk_sizes: Vec<u8>,
  seed: u32,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = xxh64(data, input.seed);

  let mut hasher = Xxh64::with_seed(input.seed);
  feed(&mut hasher, data, &input.chunk_sizes);
  assert_eq!(hasher.total_len(), data.len() as u64);
  assert!(hasher.buffered_len() < 32);
  assert_eq!(hasher.digest(), expected, "xxh64 streaming mismatch");

  // Reused after digest: same seed, clean state.
  feed(&mut hasher, data, &input.chunk_sizes);
  assert_eq!(hasher.digest(), expected, "xxh64 reuse mismatch");
});

fn feed(hasher: &mut Xxh64, data: &[u8], chunk_sizes: &[u8]) {
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      usize::from(chunk_sizes[chunk_idx % chunk_sizes.len()])
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;

    // All-zero sizes would never advance.
    if chunk_idx > data.len() + chunk_sizes.len() {
      hasher.update(&data[offset..]);
      break;
    }
  }
}
