// Integration tests for the StreamingHasher put/hash API
// Tests cover: chunk ordering and counts, padding, determinism, encoding,
// window consumption, argument validation, processors

use bytes::Bytes;
use proptest::prelude::*;
use streamhash::{
    ByteWindow, ChunkCall, Concat, Fnv1a64, HashError, HasherConfig, Recording, StreamingHasher,
};

fn concat_hasher(chunk: usize) -> StreamingHasher<Concat> {
    StreamingHasher::new(HasherConfig::new(chunk).unwrap(), Concat::new())
}

fn recording_hasher(chunk: usize, buffer: usize) -> StreamingHasher<Recording> {
    StreamingHasher::new(
        HasherConfig::with_buffer(chunk, buffer).unwrap(),
        Recording::new(),
    )
}

fn padded(data: &[u8], chunk: usize) -> Vec<u8> {
    let mut out = data.to_vec();
    let rem = data.len() % chunk;
    if rem != 0 {
        out.resize(data.len() + chunk - rem, 0);
    }
    out
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_empty_input() {
    let mut hasher = recording_hasher(4, 4);
    let calls = hasher.hash();

    assert!(calls.is_empty(), "Empty input should produce no hook calls");
    assert_eq!(hasher.processor().materialize_count(), 1);
}

#[test]
fn test_single_int_little_endian() {
    let mut hasher = concat_hasher(4);
    hasher.put_int(0x0403_0201).unwrap();

    assert_eq!(hasher.hash(), [0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn test_every_primitive_width() {
    let mut hasher = concat_hasher(1);
    hasher
        .put_byte(0x11)
        .unwrap()
        .put_short(0x2221)
        .unwrap()
        .put_char(0x3331)
        .unwrap()
        .put_int(0x4443_4241)
        .unwrap()
        .put_long(0x5857_5655_5453_5251)
        .unwrap();

    assert_eq!(
        hasher.hash(),
        [
            0x11, // byte
            0x21, 0x22, // short
            0x31, 0x33, // char
            0x41, 0x42, 0x43, 0x44, // int
            0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, // long
        ]
    );
}

#[test]
fn test_negative_values_not_sign_extended() {
    let mut hasher = concat_hasher(1);
    hasher.put_short(-1).unwrap().put_int(-2).unwrap();

    assert_eq!(hasher.hash(), [0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn test_supplementary_primitives() {
    let mut hasher = concat_hasher(1);
    hasher
        .put_bool(true)
        .unwrap()
        .put_bool(false)
        .unwrap()
        .put_float(1.0)
        .unwrap()
        .put_double(-2.0)
        .unwrap()
        .put_str("hi")
        .unwrap();

    let mut expected = vec![1, 0];
    expected.extend_from_slice(&1.0f32.to_bits().to_le_bytes());
    expected.extend_from_slice(&(-2.0f64).to_bits().to_le_bytes());
    expected.extend_from_slice(b"hi");
    assert_eq!(hasher.hash(), expected);
}

// ============================================================================
// Chunking and Padding
// ============================================================================

#[test]
fn test_chunk_counts() {
    for (len, full, finals) in [(0, 0, 0), (3, 0, 1), (4, 1, 0), (9, 2, 1), (16, 4, 0)] {
        let mut hasher = recording_hasher(4, 4);
        hasher.put_slice(&vec![0xAB; len]).unwrap();
        hasher.hash();

        assert_eq!(hasher.processor().full_count(), full, "full calls for {len} bytes");
        assert_eq!(hasher.processor().final_count(), finals, "final calls for {len} bytes");
    }
}

#[test]
fn test_final_chunk_carries_valid_length() {
    let mut hasher = recording_hasher(8, 8);
    hasher.put_slice(b"abcdefghij").unwrap();

    let calls = hasher.hash();
    assert_eq!(
        calls.last(),
        Some(&ChunkCall::Final {
            chunk: b"ij\0\0\0\0\0\0".to_vec(),
            valid_len: 2,
        })
    );
}

#[test]
fn test_large_input_spans_many_chunks() {
    let data: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
    let mut hasher = recording_hasher(16, 64);
    hasher.put_byte(0xEE).unwrap();
    hasher.put_slice(&data).unwrap();

    let calls = hasher.hash();
    let mut expected = vec![0xEE];
    expected.extend_from_slice(&data);

    assert_eq!(hasher.processor().concatenated(), padded(&expected, 16));
    assert!(calls.iter().all(|c| c.bytes().len() == 16));
    assert_eq!(hasher.bytes_consumed(), 1001);
}

#[test]
fn test_buffer_size_does_not_change_chunks() {
    let data: Vec<u8> = (0..200).map(|i| (i * 7 + 3) as u8).collect();

    let mut reference = recording_hasher(8, 8);
    reference.put_slice(&data).unwrap();
    let expected = reference.hash();

    for buffer in [8, 13, 16, 64, 256] {
        let mut hasher = recording_hasher(8, buffer);
        for piece in data.chunks(11) {
            hasher.put_slice(piece).unwrap();
        }
        assert_eq!(hasher.hash(), expected, "buffer size {buffer}");
    }
}

// ============================================================================
// Determinism and Finalization
// ============================================================================

#[test]
fn test_split_input_matches_whole() {
    let config = HasherConfig::new(8).unwrap();

    let mut split = StreamingHasher::new(config, Fnv1a64::new());
    split
        .put_byte(1)
        .unwrap()
        .put_bytes(Some(&[2u8, 3, 4, 5, 6][..]), 0, 5)
        .unwrap()
        .put_byte(7)
        .unwrap()
        .put_bytes(Some(&[0u8; 0][..]), 0, 0)
        .unwrap()
        .put_bytes(Some(&[8u8][..]), 0, 1)
        .unwrap();

    let mut whole = StreamingHasher::new(config, Fnv1a64::new());
    whole.put_slice(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

    assert_eq!(split.hash(), whole.hash());
}

#[test]
fn test_hash_twice_returns_same_result() {
    let mut hasher = StreamingHasher::new(HasherConfig::new(4).unwrap(), Fnv1a64::new());
    hasher.put_str("idempotent").unwrap();

    let first = hasher.hash();
    let second = hasher.hash();
    assert_eq!(first, second);
}

#[test]
fn test_put_after_hash_is_rejected() {
    let mut hasher = concat_hasher(4);
    hasher.put_int(1).unwrap();
    let before = hasher.hash();

    assert!(matches!(hasher.put_int(2), Err(HashError::AlreadyFinalized)));
    assert!(matches!(
        hasher.put_buf(Bytes::from_static(b"x")),
        Err(HashError::AlreadyFinalized)
    ));
    assert_eq!(hasher.hash(), before);
}

#[cfg(feature = "hash-blake3")]
#[test]
fn test_blake3_matches_reference_for_any_chunk_size() {
    use streamhash::Blake3Processor;

    let data: Vec<u8> = (0..5000).map(|i| (i % 256) as u8).collect();
    let expected = blake3::hash(&data);

    for chunk in [1, 7, 64, 1024] {
        let mut hasher =
            StreamingHasher::new(HasherConfig::new(chunk).unwrap(), Blake3Processor::new());
        hasher.put_slice(&data).unwrap();
        assert_eq!(hasher.hash().as_bytes(), expected.as_bytes());
    }
}

// ============================================================================
// Window Consumption
// ============================================================================

#[test]
fn test_window_consumes_remaining_only() {
    let data = [0xA0u8, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5];
    let mut window = ByteWindow::with_bounds(&data, 2, 5).unwrap();

    let mut hasher = concat_hasher(1);
    hasher.put_window(Some(&mut window)).unwrap();

    assert_eq!(window.position(), 5);
    assert_eq!(window.limit(), 5);
    assert_eq!(window.remaining(), 0);
    assert_eq!(hasher.hash(), [0xA2, 0xA3, 0xA4]);
}

#[test]
fn test_consumed_window_adds_nothing() {
    let data = [1u8, 2, 3];
    let mut window = ByteWindow::new(&data);

    let mut hasher = concat_hasher(4);
    hasher.put_window(Some(&mut window)).unwrap();
    hasher.put_window(Some(&mut window)).unwrap();

    assert_eq!(hasher.bytes_consumed(), 3);
    assert_eq!(hasher.hash(), [1, 2, 3, 0]);
}

// ============================================================================
// Edge Cases and Validation
// ============================================================================

#[test]
fn test_empty_put_is_noop() {
    let mut hasher = recording_hasher(4, 4);
    hasher.put_slice(&[1, 2]).unwrap();
    hasher.put_bytes(Some(&[9u8, 9][..]), 1, 0).unwrap();
    hasher.put_slice(&[]).unwrap();

    assert_eq!(hasher.buffered_len(), 2);
    assert_eq!(hasher.processor().calls().len(), 0);
}

#[test]
fn test_null_rejected_even_when_empty() {
    let mut hasher = concat_hasher(4);

    assert!(matches!(
        hasher.put_bytes(None, 0, 0),
        Err(HashError::NullArgument { argument: "data" })
    ));
    assert!(matches!(
        hasher.put_bytes(None, 0, 4),
        Err(HashError::NullArgument { .. })
    ));
    assert!(matches!(
        hasher.put_window(None),
        Err(HashError::NullArgument { argument: "window" })
    ));
    assert_eq!(hasher.bytes_consumed(), 0);
}

#[test]
fn test_out_of_bounds_ranges() {
    let data = [0u8; 4];
    let mut hasher = concat_hasher(4);

    for (offset, length) in [(5, 0), (0, 5), (3, 2), (usize::MAX, 1)] {
        let err = hasher.put_bytes(Some(&data[..]), offset, length).unwrap_err();
        assert!(
            matches!(err, HashError::OutOfBounds { available: 4, .. }),
            "offset {offset} length {length}"
        );
    }

    // Exactly at the end is fine
    hasher.put_bytes(Some(&data[..]), 4, 0).unwrap();
    hasher.put_bytes(Some(&data[..]), 0, 4).unwrap();
    assert_eq!(hasher.bytes_consumed(), 4);
}

#[test]
fn test_invalid_configs() {
    assert!(HasherConfig::new(0).is_err());
    assert!(HasherConfig::with_buffer(16, 8).is_err());

    assert!(matches!(
        HasherConfig::default().with_chunk_size(0),
        Err(HashError::InvalidConfig { .. })
    ));
    assert!(matches!(
        HasherConfig::default().with_buffer_size(4),
        Err(HashError::InvalidConfig { .. })
    ));
    assert!(HasherConfig::default().with_chunk_size(32).is_err());
}

// ============================================================================
// Property Tests
// ============================================================================

/// Splits `data` at the given cut points (taken modulo its length).
fn split_at_cuts(data: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    if data.is_empty() {
        return vec![Vec::new()];
    }
    let mut points: Vec<usize> = cuts.iter().map(|c| c % data.len()).collect();
    points.sort_unstable();
    points.dedup();

    let mut pieces = Vec::new();
    let mut start = 0;
    for p in points {
        pieces.push(data[start..p].to_vec());
        start = p;
    }
    pieces.push(data[start..].to_vec());
    pieces
}

fn chunk_and_buffer() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=32).prop_flat_map(|chunk| (Just(chunk), chunk..=chunk * 4 + 3))
}

proptest! {
    /// Property: hooks see the input in order, zero-padded to a chunk multiple
    #[test]
    fn prop_order_preserved(
        data in prop::collection::vec(any::<u8>(), 0..2048),
        cuts in prop::collection::vec(any::<usize>(), 0..16),
        (chunk, buffer) in chunk_and_buffer(),
    ) {
        let mut hasher = recording_hasher(chunk, buffer);
        for piece in split_at_cuts(&data, &cuts) {
            hasher.put_slice(&piece).unwrap();
        }
        hasher.hash();

        prop_assert_eq!(hasher.processor().concatenated(), padded(&data, chunk));
    }

    /// Property: N / C full calls and one final call iff N % C != 0
    #[test]
    fn prop_chunk_count_invariant(
        len in 0usize..4096,
        (chunk, buffer) in chunk_and_buffer(),
    ) {
        let mut hasher = recording_hasher(chunk, buffer);
        hasher.put_slice(&vec![0x5A; len]).unwrap();
        let calls = hasher.hash();

        prop_assert_eq!(hasher.processor().full_count(), len / chunk);
        prop_assert_eq!(hasher.processor().final_count(), usize::from(len % chunk != 0));
        if let Some(ChunkCall::Final { valid_len, chunk: bytes }) = calls.last() {
            prop_assert_eq!(*valid_len, len % chunk);
            prop_assert_eq!(bytes.len(), chunk);
        }
    }

    /// Property: the same bytes hash identically however they are split
    #[test]
    fn prop_split_independent(
        data in prop::collection::vec(any::<u8>(), 0..1024),
        cuts in prop::collection::vec(any::<usize>(), 0..16),
        (chunk, buffer) in chunk_and_buffer(),
    ) {
        let config = HasherConfig::with_buffer(chunk, buffer).unwrap();

        let mut whole = StreamingHasher::new(config, Fnv1a64::new());
        whole.put_slice(&data).unwrap();

        let mut split = StreamingHasher::new(config, Fnv1a64::new());
        for piece in split_at_cuts(&data, &cuts) {
            let mut window = ByteWindow::new(&piece);
            split.put_window(Some(&mut window)).unwrap();
        }

        prop_assert_eq!(split.hash(), whole.hash());
    }

    /// Property: primitives encode to their little-endian bytes
    #[test]
    fn prop_primitives_match_to_le_bytes(a in any::<i16>(), b in any::<i32>(), c in any::<i64>()) {
        let mut hasher = concat_hasher(1);
        hasher.put_short(a).unwrap().put_int(b).unwrap().put_long(c).unwrap();

        let mut expected = a.to_le_bytes().to_vec();
        expected.extend_from_slice(&b.to_le_bytes());
        expected.extend_from_slice(&c.to_le_bytes());
        prop_assert_eq!(hasher.hash(), expected);
    }
}
