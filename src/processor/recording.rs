//! Processor that records hook calls, for tests and diagnostics.

use super::ChunkProcessor;

/// One observed hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkCall {
    /// A `process_full` call with its chunk.
    Full(Vec<u8>),
    /// A `process_final` call with the padded chunk and valid prefix length.
    Final {
        /// Padded chunk bytes.
        chunk: Vec<u8>,
        /// Number of leading input bytes in `chunk`.
        valid_len: usize,
    },
}

impl ChunkCall {
    /// Bytes passed to the hook.
    pub fn bytes(&self) -> &[u8] {
        match self {
            ChunkCall::Full(chunk) | ChunkCall::Final { chunk, .. } => chunk,
        }
    }

    /// Returns true for a `process_final` call.
    pub fn is_final(&self) -> bool {
        matches!(self, ChunkCall::Final { .. })
    }
}

/// Records every hook call in order; materializes the call log.
#[derive(Debug, Clone, Default)]
pub struct Recording {
    calls: Vec<ChunkCall>,
    materialized: usize,
}

impl Recording {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls observed so far.
    pub fn calls(&self) -> &[ChunkCall] {
        &self.calls
    }

    /// Number of `process_full` calls.
    pub fn full_count(&self) -> usize {
        self.calls.iter().filter(|c| !c.is_final()).count()
    }

    /// Number of `process_final` calls.
    pub fn final_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_final()).count()
    }

    /// Number of `materialize` calls.
    pub fn materialize_count(&self) -> usize {
        self.materialized
    }

    /// All recorded bytes concatenated in call order.
    pub fn concatenated(&self) -> Vec<u8> {
        self.calls.iter().flat_map(|c| c.bytes().iter().copied()).collect()
    }
}

impl ChunkProcessor for Recording {
    type Output = Vec<ChunkCall>;

    fn process_full(&mut self, chunk: &[u8]) {
        self.calls.push(ChunkCall::Full(chunk.to_vec()));
    }

    fn process_final(&mut self, chunk: &[u8], valid_len: usize) {
        self.calls.push(ChunkCall::Final {
            chunk: chunk.to_vec(),
            valid_len,
        });
    }

    fn materialize(&mut self) -> Vec<ChunkCall> {
        self.materialized += 1;
        self.calls.clone()
    }
}
