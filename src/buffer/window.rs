//! Position/limit cursor over a borrowed byte slice.

use crate::error::HashError;

/// A bounded read window over a byte slice.
///
/// The readable bytes are `data[position..limit]`. Reading through
/// [`ByteWindow::take_remaining`] advances `position` to `limit`, so a window
/// handed to [`StreamingHasher::put_window`] comes back fully consumed.
///
/// Invariant: `position <= limit <= data.len()`.
///
/// # Example
///
/// ```
/// use streamhash::ByteWindow;
///
/// let data = [1u8, 2, 3, 4, 5];
/// let mut window = ByteWindow::with_bounds(&data, 1, 4)?;
///
/// assert_eq!(window.remaining(), 3);
/// assert_eq!(window.take_remaining(), &[2, 3, 4]);
/// assert_eq!(window.position(), 4);
/// assert!(!window.has_remaining());
/// # Ok::<(), streamhash::HashError>(())
/// ```
///
/// [`StreamingHasher::put_window`]: crate::StreamingHasher::put_window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteWindow<'a> {
    data: &'a [u8],
    position: usize,
    limit: usize,
}

impl<'a> ByteWindow<'a> {
    /// Creates a window spanning all of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            limit: data.len(),
        }
    }

    /// Creates a window over `data[position..limit]`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::OutOfBounds`] unless
    /// `position <= limit <= data.len()`.
    pub fn with_bounds(data: &'a [u8], position: usize, limit: usize) -> Result<Self, HashError> {
        if position > limit || limit > data.len() {
            return Err(HashError::OutOfBounds {
                offset: position,
                length: limit.saturating_sub(position),
                available: data.len(),
            });
        }
        Ok(Self {
            data,
            position,
            limit,
        })
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// End of the readable range (exclusive).
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Moves the read position.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::OutOfBounds`] if `position > limit`.
    pub fn set_position(&mut self, position: usize) -> Result<(), HashError> {
        if position > self.limit {
            return Err(HashError::OutOfBounds {
                offset: position,
                length: 0,
                available: self.limit,
            });
        }
        self.position = position;
        Ok(())
    }

    /// Moves the limit. A position past the new limit is pulled back to it.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::OutOfBounds`] if `limit > data.len()`.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), HashError> {
        if limit > self.data.len() {
            return Err(HashError::OutOfBounds {
                offset: 0,
                length: limit,
                available: self.data.len(),
            });
        }
        self.limit = limit;
        self.position = self.position.min(limit);
        Ok(())
    }

    /// Bytes between position and limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Returns true if any bytes remain.
    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Returns the remaining bytes and advances position to limit.
    pub fn take_remaining(&mut self) -> &'a [u8] {
        let out = &self.data[self.position..self.limit];
        self.position = self.limit;
        out
    }
}
