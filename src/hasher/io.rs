//! `std::io` adapters.
//!
//! - `impl Write for StreamingHasher` - use a hasher as an `io::copy` sink
//! - [`hash_reader`] - hash everything a [`Read`] yields

use std::io::{self, Read, Write};

use tracing::debug;

use super::StreamingHasher;
use crate::config::HasherConfig;
use crate::error::HashError;
use crate::processor::ChunkProcessor;

/// Size of the read buffer used by [`hash_reader`].
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

impl<P: ChunkProcessor> Write for StreamingHasher<P> {
    /// Writes the whole buffer. Fails with [`io::ErrorKind::Other`] wrapping
    /// [`HashError::AlreadyFinalized`] once the hasher is finalized.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.put_slice(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads `reader` to EOF through a new hasher and returns the hash.
///
/// Reads interrupted by [`io::ErrorKind::Interrupted`] are retried.
///
/// # Errors
///
/// Returns [`HashError::Io`] if the reader fails.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use streamhash::{hash_reader, Fnv1a64, HasherConfig};
///
/// let code = hash_reader(Cursor::new(b"foobar"), HasherConfig::new(4)?, Fnv1a64::new())?;
/// assert_eq!(code.padded_to_u64(), 0x8594_4171_f739_67e8);
/// # Ok::<(), streamhash::HashError>(())
/// ```
pub fn hash_reader<R, P>(
    mut reader: R,
    config: HasherConfig,
    processor: P,
) -> Result<P::Output, HashError>
where
    R: Read,
    P: ChunkProcessor,
{
    let mut hasher = StreamingHasher::new(config, processor);
    let mut buf = vec![0u8; READ_BUFFER_SIZE];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                hasher.put_slice(&buf[..n])?;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!(error = %e, bytes = hasher.bytes_consumed(), "reader failed");
                return Err(HashError::Io(e));
            }
        }
    }

    Ok(hasher.hash())
}
