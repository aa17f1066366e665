//! Configuration for hasher chunking behavior.
//!
//! [`HasherConfig`] fixes the two sizes a streaming hasher is built around:
//!
//! - `chunk_size` - how many bytes each call to the chunk processor receives
//! - `buffer_size` - how many bytes may be staged before a flush
//!
//! # Example
//!
//! ```
//! use streamhash::HasherConfig;
//!
//! // Chunk and buffer of 16 bytes
//! let config = HasherConfig::new(16)?;
//!
//! // Stage up to four chunks before flushing
//! let config = HasherConfig::with_buffer(16, 64)?;
//! assert_eq!(config.buffer_size(), 64);
//!
//! # Ok::<(), streamhash::HashError>(())
//! ```

use tracing::debug;

use crate::error::HashError;

/// Default chunk size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Sizing of a [`StreamingHasher`](crate::StreamingHasher).
///
/// # Size Constraints
///
/// - `chunk_size` must be non-zero
/// - `buffer_size` must be at least `chunk_size`
///
/// A buffer larger than the chunk lets several chunks be staged before the
/// processor runs. The processor still receives exactly one chunk per call.
///
/// # Example
///
/// ```
/// use streamhash::HasherConfig;
///
/// let config = HasherConfig::default()
///     .with_chunk_size(8)?
///     .with_buffer_size(32)?;
/// assert_eq!(config.chunk_size(), 8);
///
/// assert!(HasherConfig::default().with_buffer_size(4).is_err());
/// # Ok::<(), streamhash::HashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasherConfig {
    /// Bytes per processed chunk.
    chunk_size: usize,

    /// Capacity of the staging buffer in bytes.
    buffer_size: usize,
}

impl HasherConfig {
    /// Creates a configuration whose buffer holds exactly one chunk.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if `chunk_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use streamhash::HasherConfig;
    ///
    /// let config = HasherConfig::new(4)?;
    /// assert_eq!(config.chunk_size(), 4);
    /// assert_eq!(config.buffer_size(), 4);
    /// # Ok::<(), streamhash::HashError>(())
    /// ```
    pub fn new(chunk_size: usize) -> Result<Self, HashError> {
        Self::with_buffer(chunk_size, chunk_size)
    }

    /// Creates a configuration with an explicit staging capacity.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if:
    /// - `chunk_size` is zero
    /// - `buffer_size < chunk_size`
    pub fn with_buffer(chunk_size: usize, buffer_size: usize) -> Result<Self, HashError> {
        if chunk_size == 0 {
            debug!("rejected zero chunk size");
            return Err(HashError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }

        if buffer_size < chunk_size {
            debug!(chunk_size, buffer_size, "rejected undersized buffer");
            return Err(HashError::InvalidConfig {
                message: "buffer size cannot be smaller than chunk size",
            });
        }

        Ok(Self {
            chunk_size,
            buffer_size,
        })
    }

    /// Replaces the chunk size, keeping the buffer size.
    ///
    /// To grow the chunk past the current buffer, set the buffer first or
    /// use [`HasherConfig::with_buffer`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if the result would be invalid.
    pub fn with_chunk_size(self, size: usize) -> Result<Self, HashError> {
        Self::with_buffer(size, self.buffer_size)
    }

    /// Replaces the staging buffer size, keeping the chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if `size` is below the chunk size.
    pub fn with_buffer_size(self, size: usize) -> Result<Self, HashError> {
        Self::with_buffer(self.chunk_size, size)
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the staging buffer size.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            buffer_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
