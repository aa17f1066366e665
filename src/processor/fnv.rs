//! FNV-1a 64-bit processor.

use super::ChunkProcessor;
use crate::hash::HashCode;

const FNV_PRIME_64: u64 = 0x0000_0100_0000_01B3;
const FNV_OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a over the input bytes. Padding is excluded, so the result depends
/// only on the input and not on the chunk size.
///
/// The hash code is the 64-bit state in little-endian order.
#[derive(Debug, Clone)]
pub struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    /// Creates a processor at the FNV offset basis.
    pub fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS_64,
        }
    }

    fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(FNV_PRIME_64);
        }
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkProcessor for Fnv1a64 {
    type Output = HashCode;

    fn process_full(&mut self, chunk: &[u8]) {
        self.update(chunk);
    }

    fn process_final(&mut self, chunk: &[u8], valid_len: usize) {
        self.update(&chunk[..valid_len]);
    }

    fn materialize(&mut self) -> HashCode {
        HashCode::from(self.state.to_le_bytes())
    }
}
