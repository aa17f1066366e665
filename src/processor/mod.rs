//! Chunk processors: the pluggable half of a streaming hasher.
//!
//! A [`StreamingHasher`](crate::StreamingHasher) owns the buffering and
//! padding; a [`ChunkProcessor`] owns the hash function. The hasher
//! guarantees:
//!
//! - [`process_full`](ChunkProcessor::process_full) receives exactly
//!   `chunk_size` bytes per call, in input order
//! - [`process_final`](ChunkProcessor::process_final) runs at most once,
//!   after every full chunk, and only when the input length is not a
//!   multiple of `chunk_size`
//! - [`materialize`](ChunkProcessor::materialize) runs exactly once
//!
//! Bundled processors:
//!
//! - [`Concat`] - returns every processed byte (reference implementation)
//! - [`Recording`] - records each hook call
//! - [`Fnv1a64`] - FNV-1a, 64 bit
//! - [`Blake3Processor`] - BLAKE3 (requires `hash-blake3` feature)

#[cfg(feature = "hash-blake3")]
mod blake3;
mod concat;
mod fnv;
mod recording;

#[cfg(feature = "hash-blake3")]
pub use self::blake3::Blake3Processor;
pub use concat::Concat;
pub use fnv::Fnv1a64;
pub use recording::{ChunkCall, Recording};

/// The hash function behind a [`StreamingHasher`](crate::StreamingHasher).
///
/// # Example
///
/// A processor that sums every input byte:
///
/// ```
/// use streamhash::{ChunkProcessor, HasherConfig, StreamingHasher};
///
/// #[derive(Default)]
/// struct ByteSum(u64);
///
/// impl ChunkProcessor for ByteSum {
///     type Output = u64;
///
///     fn process_full(&mut self, chunk: &[u8]) {
///         self.0 += chunk.iter().map(|&b| u64::from(b)).sum::<u64>();
///     }
///
///     fn materialize(&mut self) -> u64 {
///         self.0
///     }
/// }
///
/// let mut hasher = StreamingHasher::new(HasherConfig::new(4)?, ByteSum::default());
/// hasher.put_slice(&[1, 2, 3, 4, 5])?;
/// assert_eq!(hasher.hash(), 15);
/// # Ok::<(), streamhash::HashError>(())
/// ```
pub trait ChunkProcessor {
    /// Materialized hash type. Cloned when `hash()` is called again.
    type Output: Clone;

    /// Consumes one full chunk of exactly `chunk_size` bytes.
    fn process_full(&mut self, chunk: &[u8]);

    /// Consumes the trailing partial chunk.
    ///
    /// `chunk` is `chunk_size` bytes long; `chunk[..valid_len]` is input and
    /// the rest is zero padding, with `0 < valid_len < chunk_size`.
    ///
    /// The default treats the padded chunk like any other.
    fn process_final(&mut self, chunk: &[u8], _valid_len: usize) {
        self.process_full(chunk);
    }

    /// Produces the hash from the processed state.
    fn materialize(&mut self) -> Self::Output;
}
