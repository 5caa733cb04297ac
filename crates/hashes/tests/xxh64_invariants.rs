use std::{
  collections::HashMap,
  hash::{BuildHasher, Hasher},
  io::{Cursor, IoSlice, IoSliceMut, Read, Write},
};

use hashes::{
  FastHash as _, StreamingHash as _,
  fast::{Xxh64, Xxh64BuildHasher, xxh64},
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

const LENGTHS: [usize; 17] = [0, 1, 3, 4, 7, 8, 15, 16, 31, 32, 33, 63, 64, 65, 127, 1000, 4099];
const SEEDS: [u32; 4] = [0, 1, 0x9E37_79B1, u32::MAX];

#[test]
fn xxh64_invariants() {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, u64::from(seed) ^ len as u64);

      let oneshot = xxh64(&data, seed);
      assert_eq!(oneshot, xxh64(&data, seed), "determinism len={len} seed={seed}");
      assert_eq!(Xxh64::hash_with_seed(seed, &data), oneshot);

      for &split in &[0usize, 1.min(len), len / 2, len.saturating_sub(1), len] {
        let (a, b) = data.split_at(split);

        let mut h = Xxh64::with_seed(seed);
        h.update(a);
        h.update(&[]);
        h.update(b);
        assert_eq!(h.digest(), oneshot, "split mismatch len={len} split={split} seed={seed}");

        assert_eq!(Xxh64::hash_chunks(seed, &[a, b]), oneshot);
      }
    }
  }
}

#[test]
fn xxh64_digest_reuse_matches_fresh_state() {
  let first = gen_bytes(77, 1);
  let second = gen_bytes(500, 2);

  let mut reused = Xxh64::with_seed(42);
  reused.update(&first);
  let _ = reused.digest();
  reused.update(&second);

  let mut fresh = Xxh64::with_seed(42);
  fresh.update(&second);

  assert_eq!(reused.digest(), fresh.digest());
}

#[test]
fn xxh64_reset_discards_partial_input() {
  let mut h = Xxh64::with_seed(3);
  h.update(b"some bytes that will be thrown away");
  h.reset();
  assert_eq!(h.total_len(), 0);
  assert_eq!(h.buffered_len(), 0);
  h.update(b"kept");
  assert_eq!(h.finalize(), xxh64(b"kept", 3));
}

#[test]
fn xxh64_clone_forks_state() {
  let mut a = Xxh64::new();
  a.update(b"shared prefix, longer than one stripe of input");
  let mut b = a.clone();
  a.update(b"-left");
  b.update(b"-right");
  assert_eq!(a.finalize(), xxh64(b"shared prefix, longer than one stripe of input-left", 0));
  assert_eq!(b.finalize(), xxh64(b"shared prefix, longer than one stripe of input-right", 0));
}

#[test]
fn xxh64_seed_sensitivity() {
  for &len in &LENGTHS {
    let data = gen_bytes(len, 99);
    let digests: Vec<u64> = SEEDS.iter().map(|&s| xxh64(&data, s)).collect();
    for i in 0..digests.len() {
      for j in i + 1..digests.len() {
        assert_ne!(digests[i], digests[j], "len={len} seeds {} vs {}", SEEDS[i], SEEDS[j]);
      }
    }
  }
}

#[test]
fn xxh64_total_len_counts_every_byte() {
  let mut h = Xxh64::new();
  let mut expected = 0u64;
  for len in [5usize, 0, 31, 32, 1, 100] {
    h.update(&gen_bytes(len, len as u64));
    expected += len as u64;
    assert_eq!(h.total_len(), expected);
  }
}

#[test]
fn xxh64_io_reader_and_writer() {
  let data = gen_bytes(10_000, 7);
  let expected = xxh64(&data, 0);

  let mut reader = Xxh64::reader(Cursor::new(data.clone()));
  let mut sink = Vec::new();
  let mut buf = [0u8; 333];
  loop {
    let n = reader.read(&mut buf).unwrap();
    if n == 0 {
      break;
    }
    sink.extend_from_slice(&buf[..n]);
  }
  assert_eq!(sink, data);
  assert_eq!(reader.hash(), expected);

  let mut writer = hashes::io::HashWriter::<_, Xxh64>::with_seed(Vec::new(), 9);
  for part in data.chunks(1000) {
    writer.write_all(part).unwrap();
  }
  let (out, hash) = writer.into_parts();
  assert_eq!(out, data);
  assert_eq!(hash, xxh64(&data, 9));
}

/// Accepts at most `limit` bytes per call; vectored writes use the default
/// (first non-empty slice only).
struct Trickle {
  out: Vec<u8>,
  limit: usize,
}

impl Write for Trickle {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let n = buf.len().min(self.limit);
    self.out.extend_from_slice(&buf[..n]);
    Ok(n)
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[test]
fn xxh64_vectored_io_skips_empty_slices() {
  let mut writer = Xxh64::writer(Vec::new());
  let bufs = [IoSlice::new(b"ab"), IoSlice::new(b""), IoSlice::new(b"cd")];
  assert_eq!(writer.write_vectored(&bufs).unwrap(), 4);
  let (out, hash) = writer.into_parts();
  assert_eq!(out, b"abcd");
  assert_eq!(hash, xxh64(b"abcd", 0));

  let mut reader = Xxh64::reader(Cursor::new(b"abcdefghij".to_vec()));
  let (mut a, mut b, mut c) = ([0u8; 3], [0u8; 0], [0u8; 5]);
  let mut bufs = [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b), IoSliceMut::new(&mut c)];
  assert_eq!(reader.read_vectored(&mut bufs).unwrap(), 8);
  assert_eq!(reader.hash(), xxh64(b"abcdefgh", 0));
}

#[test]
fn xxh64_vectored_short_writes_hash_each_byte_once() {
  let data = gen_bytes(300, 17);
  let mut writer = Xxh64::writer(Trickle { out: Vec::new(), limit: 7 });

  let mut pending: &[u8] = &data;
  while !pending.is_empty() {
    let (head, tail) = pending.split_at(pending.len() / 2);
    let bufs = [IoSlice::new(b""), IoSlice::new(head), IoSlice::new(b""), IoSlice::new(tail)];
    let n = writer.write_vectored(&bufs).unwrap();
    assert!(n > 0);
    pending = &pending[n..];
  }

  let (sink, hash) = writer.into_parts();
  assert_eq!(sink.out, data);
  assert_eq!(hash, xxh64(&data, 0));
}

#[test]
fn xxh64_update_io_slices_matches_oneshot() {
  let data = gen_bytes(100, 23);
  let (a, rest) = data.split_at(33);
  let (b, c) = rest.split_at(31);
  let mut h = Xxh64::with_seed(8);
  h.update_io_slices(&[IoSlice::new(a), IoSlice::new(&[]), IoSlice::new(b), IoSlice::new(c)]);
  assert_eq!(h.digest(), xxh64(&data, 8));
}

#[test]
fn xxh64_as_std_hasher() {
  let build = Xxh64BuildHasher::with_seed(5);

  let mut h = build.build_hasher();
  h.write(b"key");
  assert_eq!(h.finish(), xxh64(b"key", 5));

  let mut map: HashMap<String, usize, Xxh64BuildHasher> = HashMap::with_hasher(build);
  for i in 0..100 {
    map.insert(format!("k{i}"), i);
  }
  for i in 0..100 {
    assert_eq!(map.get(&format!("k{i}")), Some(&i));
  }
}

#[test]
fn xxh64_kernel_introspection() {
  let cfg = Xxh64::config();
  assert_eq!(cfg.tunables, Xxh64::tunables());
  assert!(Xxh64::backend_name().starts_with("portable/"));
  for len in [0usize, 32, 4096, 1 << 20] {
    assert!(Xxh64::kernel_name_for_len(len).starts_with("portable/"));
  }
}
