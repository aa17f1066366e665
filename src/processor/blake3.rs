//! BLAKE3 processor.

use super::ChunkProcessor;
use crate::hash::HashCode;

/// BLAKE3 over the input bytes, 32-byte output.
///
/// Padding is excluded, so the result equals `blake3::hash(input)` for any
/// chunk size.
#[derive(Debug, Clone)]
pub struct Blake3Processor {
    state: blake3::Hasher,
}

impl Blake3Processor {
    /// Creates an unkeyed processor.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Creates a processor for keyed hashing.
    pub fn new_keyed(key: &[u8; 32]) -> Self {
        Self {
            state: blake3::Hasher::new_keyed(key),
        }
    }
}

impl Default for Blake3Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkProcessor for Blake3Processor {
    type Output = HashCode;

    fn process_full(&mut self, chunk: &[u8]) {
        self.state.update(chunk);
    }

    fn process_final(&mut self, chunk: &[u8], valid_len: usize) {
        self.state.update(&chunk[..valid_len]);
    }

    fn materialize(&mut self) -> HashCode {
        HashCode::from(*self.state.finalize().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_one_shot() {
        let mut p = Blake3Processor::new();
        p.process_full(b"hello ");
        p.process_final(b"world\0", 5);

        let expected = blake3::hash(b"hello world");
        assert_eq!(p.materialize().as_bytes(), expected.as_bytes());
    }

    #[test]
    fn test_keyed_differs() {
        let mut plain = Blake3Processor::new();
        let mut keyed = Blake3Processor::new_keyed(&[7u8; 32]);
        plain.process_full(b"data");
        keyed.process_full(b"data");
        assert_ne!(plain.materialize(), keyed.materialize());
    }
}
