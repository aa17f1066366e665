//! Error types for streamhash.

use thiserror::Error;

/// Errors reported by hasher construction and put operations.
///
/// Every variant except [`HashError::Io`] is a precondition violation at the
/// call that returned it. The hasher state is left untouched when a call
/// fails.
#[derive(Debug, Error)]
pub enum HashError {
    /// A required byte source was absent.
    ///
    /// Checked before any bounds validation, so a missing source with a
    /// zero length is still rejected.
    #[error("null argument: {argument}")]
    NullArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// An `offset`/`length` pair described a range outside the source.
    #[error("range out of bounds: offset {offset} + length {length} exceeds {available} bytes")]
    OutOfBounds {
        /// Requested start offset.
        offset: usize,
        /// Requested length.
        length: usize,
        /// Bytes actually available in the source.
        available: usize,
    },

    /// A put operation was issued after `hash()` finalized the hasher.
    #[error("hasher already finalized")]
    AlreadyFinalized,

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// An I/O error occurred while reading input for [`crate::hash_reader`].
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: HashError = io_err.into();
        assert!(matches!(err, HashError::Io(_)));
    }

    #[test]
    fn test_display() {
        let err = HashError::OutOfBounds {
            offset: 3,
            length: 10,
            available: 8,
        };
        assert_eq!(
            err.to_string(),
            "range out of bounds: offset 3 + length 10 exceeds 8 bytes"
        );

        let err = HashError::NullArgument { argument: "data" };
        assert_eq!(err.to_string(), "null argument: data");
    }

    #[test]
    fn test_source() {
        use std::error::Error as _;

        let err = HashError::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(HashError::AlreadyFinalized.source().is_none());
    }
}
