//! Core hashing engine - StreamingHasher with a fluent put API.
//!
//! [`StreamingHasher`] turns a stream of primitives and byte ranges into
//! fixed-size chunks for a [`ChunkProcessor`]:
//!
//! - `put_*()` - Feed data of any size or alignment
//! - `hash()` - Pad and flush the trailing partial chunk, then materialize
//!
//! # Example
//!
//! ```
//! use streamhash::{Concat, HasherConfig, StreamingHasher};
//!
//! let mut hasher = StreamingHasher::new(HasherConfig::new(4)?, Concat::new());
//!
//! hasher.put_byte(0xAA)?.put_int(0x0403_0201)?;
//!
//! // Little-endian int, then zero padding up to the chunk boundary
//! assert_eq!(hasher.hash(), [0xAA, 0x01, 0x02, 0x03, 0x04, 0, 0, 0]);
//! # Ok::<(), streamhash::HashError>(())
//! ```

use bytes::Buf;
use tracing::{debug, trace};

use crate::buffer::{ByteWindow, StagingBuffer};
use crate::config::HasherConfig;
use crate::encode::LittleEndian;
use crate::error::HashError;
use crate::processor::ChunkProcessor;

/// An incremental hasher that buffers input into fixed-size chunks.
///
/// `StreamingHasher` owns a staging buffer of `buffer_size` bytes. Input is
/// appended to it; every complete chunk is handed to the processor's
/// [`process_full`](ChunkProcessor::process_full) in submission order.
/// Inputs larger than the free staging space are processed straight from
/// the caller's slice without an intermediate copy.
///
/// # Determinism
///
/// The processor sees the same chunks regardless of:
/// - How the input is split across put calls
/// - Whether bytes arrive as primitives or as slices
/// - The buffer size
///
/// # Finalization
///
/// The first [`hash`](StreamingHasher::hash) call zero-pads any partial
/// chunk, hands it to [`process_final`](ChunkProcessor::process_final),
/// and materializes the result. Later calls return the same result. Any
/// put after that fails with [`HashError::AlreadyFinalized`].
///
/// # Errors
///
/// Put operations fail synchronously and leave the hasher untouched:
/// - a missing source reports [`HashError::NullArgument`] before bounds
///   are examined
/// - a range past the end reports [`HashError::OutOfBounds`]
///
/// # Example
///
/// ```
/// use streamhash::{Fnv1a64, HasherConfig, StreamingHasher};
///
/// let config = HasherConfig::new(8)?;
///
/// let mut split = StreamingHasher::new(config, Fnv1a64::new());
/// split
///     .put_byte(1)?
///     .put_slice(&[2, 3, 4, 5, 6])?
///     .put_byte(7)?
///     .put_slice(&[])?
///     .put_slice(&[8])?;
///
/// let mut whole = StreamingHasher::new(config, Fnv1a64::new());
/// whole.put_slice(&[1, 2, 3, 4, 5, 6, 7, 8])?;
///
/// assert_eq!(split.hash(), whole.hash());
/// # Ok::<(), streamhash::HashError>(())
/// ```
#[derive(Debug)]
pub struct StreamingHasher<P: ChunkProcessor> {
    processor: P,
    staging: StagingBuffer,
    config: HasherConfig,
    consumed: u64,
    output: Option<P::Output>,
}

impl<P: ChunkProcessor> StreamingHasher<P> {
    /// Creates a hasher that feeds `processor`.
    ///
    /// Every [`HasherConfig`] is valid once built, so this cannot fail.
    pub fn new(config: HasherConfig, processor: P) -> Self {
        Self {
            processor,
            staging: StagingBuffer::new(config.buffer_size()),
            config,
            consumed: 0,
            output: None,
        }
    }

    /// Puts `data[offset..offset + length]`.
    ///
    /// # Errors
    ///
    /// - [`HashError::NullArgument`] if `data` is `None`, even for `length == 0`
    /// - [`HashError::OutOfBounds`] if the range does not fit in `data`
    /// - [`HashError::AlreadyFinalized`] after [`hash`](Self::hash)
    ///
    /// # Example
    ///
    /// ```
    /// use streamhash::{Concat, HashError, HasherConfig, StreamingHasher};
    ///
    /// let mut hasher = StreamingHasher::new(HasherConfig::new(2)?, Concat::new());
    /// hasher.put_bytes(Some(&b"xabcx"[..]), 1, 3)?;
    ///
    /// assert!(matches!(
    ///     hasher.put_bytes(None, 0, 0),
    ///     Err(HashError::NullArgument { .. })
    /// ));
    /// assert!(matches!(
    ///     hasher.put_bytes(Some(&b"ab"[..]), 1, 2),
    ///     Err(HashError::OutOfBounds { .. })
    /// ));
    ///
    /// assert_eq!(hasher.hash(), b"abc\0");
    /// # Ok::<(), streamhash::HashError>(())
    /// ```
    pub fn put_bytes(
        &mut self,
        data: Option<&[u8]>,
        offset: usize,
        length: usize,
    ) -> Result<&mut Self, HashError> {
        let data = data.ok_or(HashError::NullArgument { argument: "data" })?;
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= data.len())
            .ok_or(HashError::OutOfBounds {
                offset,
                length,
                available: data.len(),
            })?;
        self.ensure_open()?;
        self.absorb(&data[offset..end]);
        Ok(self)
    }

    /// Puts a whole slice.
    pub fn put_slice(&mut self, data: &[u8]) -> Result<&mut Self, HashError> {
        self.ensure_open()?;
        self.absorb(data);
        Ok(self)
    }

    /// Puts the remaining bytes of `window` and advances it to its limit.
    ///
    /// Bytes outside `position..limit` are never read.
    ///
    /// # Errors
    ///
    /// - [`HashError::NullArgument`] if `window` is `None`
    /// - [`HashError::AlreadyFinalized`] after [`hash`](Self::hash); the
    ///   window is not advanced
    pub fn put_window(
        &mut self,
        window: Option<&mut ByteWindow<'_>>,
    ) -> Result<&mut Self, HashError> {
        let window = window.ok_or(HashError::NullArgument { argument: "window" })?;
        self.ensure_open()?;
        let data = window.take_remaining();
        self.absorb(data);
        Ok(self)
    }

    /// Drains every remaining byte of a [`bytes::Buf`].
    ///
    /// The buffer is left untouched if the hasher is finalized.
    pub fn put_buf<B: Buf>(&mut self, mut buf: B) -> Result<&mut Self, HashError> {
        self.ensure_open()?;
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let n = chunk.len();
            self.absorb(chunk);
            buf.advance(n);
        }
        Ok(self)
    }

    /// Puts one byte.
    pub fn put_byte(&mut self, value: u8) -> Result<&mut Self, HashError> {
        self.put_le(value)
    }

    /// Puts a 16-bit integer, little-endian.
    pub fn put_short(&mut self, value: i16) -> Result<&mut Self, HashError> {
        self.put_le(value)
    }

    /// Puts a UTF-16 code unit, little-endian.
    pub fn put_char(&mut self, value: u16) -> Result<&mut Self, HashError> {
        self.put_le(value)
    }

    /// Puts a 32-bit integer, little-endian.
    pub fn put_int(&mut self, value: i32) -> Result<&mut Self, HashError> {
        self.put_le(value)
    }

    /// Puts a 64-bit integer, little-endian.
    pub fn put_long(&mut self, value: i64) -> Result<&mut Self, HashError> {
        self.put_le(value)
    }

    /// Puts a boolean as a single `0` or `1` byte.
    pub fn put_bool(&mut self, value: bool) -> Result<&mut Self, HashError> {
        self.put_le(value)
    }

    /// Puts the IEEE 754 bits of an `f32`, little-endian.
    pub fn put_float(&mut self, value: f32) -> Result<&mut Self, HashError> {
        self.put_le(value)
    }

    /// Puts the IEEE 754 bits of an `f64`, little-endian.
    pub fn put_double(&mut self, value: f64) -> Result<&mut Self, HashError> {
        self.put_le(value)
    }

    /// Puts any [`LittleEndian`] primitive.
    pub fn put_le<T: LittleEndian>(&mut self, value: T) -> Result<&mut Self, HashError> {
        self.ensure_open()?;
        self.absorb(value.encode_le().as_ref());
        Ok(self)
    }

    /// Puts each UTF-16 code unit of `s`, little-endian, with no length
    /// prefix or charset encoding.
    pub fn put_unencoded_chars(&mut self, s: &str) -> Result<&mut Self, HashError> {
        self.ensure_open()?;
        for unit in s.encode_utf16() {
            self.absorb(&unit.to_le_bytes());
        }
        Ok(self)
    }

    /// Puts the UTF-8 bytes of `s`.
    pub fn put_str(&mut self, s: &str) -> Result<&mut Self, HashError> {
        self.put_slice(s.as_bytes())
    }

    /// Finalizes the hasher and returns the hash.
    ///
    /// On the first call, any complete staged chunks are processed, then a
    /// partial chunk (if any) is zero-padded to `chunk_size` and handed to
    /// [`process_final`](ChunkProcessor::process_final) exactly once, then
    /// the processor materializes. Later calls return a clone of the first
    /// result without touching the processor.
    pub fn hash(&mut self) -> P::Output {
        if let Some(output) = &self.output {
            return output.clone();
        }

        self.munch();

        let valid_len = self.staging.len();
        if valid_len > 0 {
            let chunk = self.staging.pad_to(self.config.chunk_size());
            self.processor.process_final(chunk, valid_len);
            self.staging.clear();
        }

        debug!(
            bytes = self.consumed,
            padded = valid_len > 0,
            "finalized streaming hasher"
        );

        let output = self.processor.materialize();
        self.output = Some(output.clone());
        output
    }

    /// Returns the configuration used by this hasher.
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Total input bytes accepted so far, padding excluded.
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// Number of bytes staged but not yet handed to the processor.
    pub fn buffered_len(&self) -> usize {
        self.staging.len()
    }

    /// Returns true once [`hash`](Self::hash) has been called.
    pub fn is_finalized(&self) -> bool {
        self.output.is_some()
    }

    /// Returns the processor.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Consumes the hasher and returns the processor.
    pub fn into_processor(self) -> P {
        self.processor
    }

    fn ensure_open(&self) -> Result<(), HashError> {
        if self.output.is_some() {
            return Err(HashError::AlreadyFinalized);
        }
        Ok(())
    }

    /// Appends `data`, processing every chunk it completes.
    fn absorb(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.consumed += data.len() as u64;

        if data.len() <= self.staging.free() {
            self.staging.extend(data);
            if self.staging.free() == 0 {
                self.munch();
            }
            return;
        }

        // Top up the staging buffer and flush it
        let (head, mut rest) = data.split_at(self.staging.free());
        self.staging.extend(head);
        self.munch();

        // A buffer size that is not a multiple of the chunk size leaves a
        // partial chunk behind; complete it before going direct
        if !self.staging.is_empty() {
            let need = self.config.chunk_size() - self.staging.len();
            if rest.len() < need {
                self.staging.extend(rest);
                return;
            }
            let (head, tail) = rest.split_at(need);
            self.staging.extend(head);
            self.munch();
            rest = tail;
        }

        let chunk_size = self.config.chunk_size();
        let direct = rest.len() - rest.len() % chunk_size;
        if direct > 0 {
            for chunk in rest[..direct].chunks_exact(chunk_size) {
                self.processor.process_full(chunk);
            }
            trace!(
                chunks = direct / chunk_size,
                "processed chunks directly from input"
            );
        }
        self.staging.extend(&rest[direct..]);
    }

    /// Hands every complete staged chunk to the processor.
    fn munch(&mut self) {
        let chunk_size = self.config.chunk_size();
        let whole = self.staging.len() - self.staging.len() % chunk_size;
        if whole == 0 {
            return;
        }
        for chunk in self.staging.filled()[..whole].chunks_exact(chunk_size) {
            self.processor.process_full(chunk);
        }
        self.staging.compact(whole);
        trace!(chunks = whole / chunk_size, "flushed staged chunks");
    }
}

impl<P: ChunkProcessor + Default> Default for StreamingHasher<P> {
    fn default() -> Self {
        Self::new(HasherConfig::default(), P::default())
    }
}
