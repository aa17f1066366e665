//! Identity processor.

use super::ChunkProcessor;

/// Collects every byte handed to the processor hooks, padding included.
///
/// The output is the input zero-padded to a multiple of the chunk size,
/// which makes this the reference for checking ordering and padding.
#[derive(Debug, Clone, Default)]
pub struct Concat {
    bytes: Vec<u8>,
}

impl Concat {
    /// Creates an empty processor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChunkProcessor for Concat {
    type Output = Vec<u8>;

    fn process_full(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
    }

    fn materialize(&mut self) -> Vec<u8> {
        self.bytes.clone()
    }
}
