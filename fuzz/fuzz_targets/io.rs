//! Fuzz target for the hashing `Read`/`Write` adapters.
//!
//! Plain and vectored transfers, with empty slices and short writes, must
//! hash exactly the bytes that moved.

#![no_main]

use std::io::{IoSlice, IoSliceMut, Read as _, Write as _};

use arbitrary::Arbitrary;
use hashes::fast::{Xxh64, xxh64};
use libfuzzer_sys::fuzz_target;
use traits::io::{HashReader, HashWriter};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  read_buf: u8,
  sink_limit: u8,
  /// Slice lengths for vectored I/O; zero yields an empty slice.
  slice_lens: Vec<u8>,
  seed: u32,
}

/// Accepts at most `limit` bytes per `write` call.
struct Partial {
  out: Vec<u8>,
  limit: usize,
}

impl std::io::Write for Partial {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let n = buf.len().min(self.limit);
    self.out.extend_from_slice(&buf[..n]);
    Ok(n)
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

/// Lengths for one vectored call, padded with a catch-all slice.
fn layout(slice_lens: &[u8], remaining: usize) -> Vec<usize> {
  let mut lens: Vec<usize> = slice_lens.iter().take(8).map(|&l| usize::from(l)).collect();
  lens.push(remaining.max(1));
  lens
}

fn split_into<'a>(mut data: &'a [u8], lens: &[usize]) -> Vec<&'a [u8]> {
  let mut parts = Vec::with_capacity(lens.len());
  for &len in lens {
    let (head, tail) = data.split_at(len.min(data.len()));
    parts.push(head);
    data = tail;
  }
  parts
}

fuzz_target!(|input: Input| {
  let expected = xxh64(&input.data, input.seed);

  let mut reader = HashReader::<_, Xxh64>::with_seed(input.data.as_slice(), input.seed);
  let mut buf = vec![0u8; usize::from(input.read_buf).max(1)];
  while reader.read(&mut buf).unwrap() != 0 {}
  assert_eq!(reader.hash(), expected, "reader hash mismatch");

  let sink = Partial {
    out: Vec::new(),
    limit: usize::from(input.sink_limit).max(1),
  };
  let mut writer = HashWriter::<_, Xxh64>::with_seed(sink, input.seed);
  writer.write_all(&input.data).unwrap();
  let (sink, hash) = writer.into_parts();
  assert_eq!(sink.out, input.data);
  assert_eq!(hash, expected, "writer hash mismatch");

  // Vectored reads: the final slice always has room, so every call makes progress.
  let mut reader = HashReader::<_, Xxh64>::with_seed(input.data.as_slice(), input.seed);
  let mut read_back = Vec::with_capacity(input.data.len());
  loop {
    let lens = layout(&input.slice_lens, input.data.len() - read_back.len());
    let mut storage: Vec<Vec<u8>> = lens.iter().map(|&l| vec![0u8; l]).collect();
    let mut bufs: Vec<IoSliceMut<'_>> = storage.iter_mut().map(|b| IoSliceMut::new(b)).collect();
    let n = reader.read_vectored(&mut bufs).unwrap();
    drop(bufs);
    if n == 0 {
      break;
    }
    let mut left = n;
    for b in &storage {
      let take = left.min(b.len());
      read_back.extend_from_slice(&b[..take]);
      left -= take;
    }
  }
  assert_eq!(read_back, input.data);
  assert_eq!(reader.hash(), expected, "vectored reader hash mismatch");

  // Vectored short writes: resubmit whatever the sink did not take.
  let sink = Partial {
    out: Vec::new(),
    limit: usize::from(input.sink_limit).max(1),
  };
  let mut writer = HashWriter::<_, Xxh64>::with_seed(sink, input.seed);
  let mut pending: &[u8] = &input.data;
  while !pending.is_empty() {
    let parts = split_into(pending, &layout(&input.slice_lens, pending.len()));
    let bufs: Vec<IoSlice<'_>> = parts.iter().map(|p| IoSlice::new(p)).collect();
    let n = writer.write_vectored(&bufs).unwrap();
    assert!(n > 0);
    pending = &pending[n..];
  }
  let (sink, hash) = writer.into_parts();
  assert_eq!(sink.out, input.data);
  assert_eq!(hash, expected, "vectored writer hash mismatch");
});
