#![no_main]

use libfuzzer_sys::fuzz_target;
use streamhash::{Blake3Processor, ChunkCall, HasherConfig, Recording, StreamingHasher};

fuzz_target!(|input: (u8, u8, Vec<u8>, Vec<u8>)| {
    let (chunk, extra, cuts, data) = input;
    let chunk = usize::from(chunk % 64) + 1;
    let buffer = chunk + usize::from(extra % 128);
    let config = HasherConfig::with_buffer(chunk, buffer).unwrap();

    // Feed the data in pieces whose lengths come from `cuts`
    let mut hasher = StreamingHasher::new(config, Recording::new());
    let mut rest = &data[..];
    for &cut in &cuts {
        let n = usize::from(cut).min(rest.len());
        let (head, tail) = rest.split_at(n);
        hasher.put_slice(head).unwrap();
        rest = tail;
    }
    hasher.put_slice(rest).unwrap();

    let calls = hasher.hash();

    // Verify: every hook call sees exactly one chunk
    assert!(calls.iter().all(|c| c.bytes().len() == chunk));

    // Verify: only the last call may be final, and only for a partial tail
    let finals = calls.iter().filter(|c| c.is_final()).count();
    assert_eq!(finals, usize::from(data.len() % chunk != 0));
    if let Some(ChunkCall::Final { valid_len, .. }) = calls.last() {
        assert_eq!(*valid_len, data.len() % chunk);
    }

    // Verify: bytes arrive in order, zero-padded
    let observed: Vec<u8> = calls.iter().flat_map(|c| c.bytes().iter().copied()).collect();
    assert_eq!(&observed[..data.len()], &data[..]);
    assert!(observed[data.len()..].iter().all(|&b| b == 0));

    // Verify: split-independence against a one-shot hash
    let mut split = StreamingHasher::new(config, Blake3Processor::new());
    for piece in data.chunks(chunk + 1) {
        split.put_slice(piece).unwrap();
    }
    let mut whole = StreamingHasher::new(config, Blake3Processor::new());
    whole.put_slice(&data).unwrap();
    assert_eq!(split.hash(), whole.hash());
});
