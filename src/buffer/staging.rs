//! Fixed-capacity staging area for bytes awaiting chunk alignment.

/// Owned byte storage with a fill position.
///
/// Invariant: `fill <= data.len()`. Bytes in `data[..fill]` are staged
/// input; bytes beyond `fill` carry no meaning until [`pad_to`] zeroes them.
///
/// [`pad_to`]: StagingBuffer::pad_to
#[derive(Debug, Clone)]
pub(crate) struct StagingBuffer {
    data: Box<[u8]>,
    fill: usize,
}

impl StagingBuffer {
    /// Allocates a zeroed buffer of `capacity` bytes.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            fill: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of staged bytes (the fill position).
    pub(crate) fn len(&self) -> usize {
        self.fill
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.fill == 0
    }

    /// Free space before the buffer is full.
    pub(crate) fn free(&self) -> usize {
        self.data.len() - self.fill
    }

    /// Staged bytes.
    pub(crate) fn filled(&self) -> &[u8] {
        &self.data[..self.fill]
    }

    /// Appends `src`. The caller guarantees `src.len() <= self.free()`.
    pub(crate) fn extend(&mut self, src: &[u8]) {
        debug_assert!(src.len() <= self.free());
        let end = self.fill + src.len();
        self.data[self.fill..end].copy_from_slice(src);
        self.fill = end;
    }

    /// Drops the first `consumed` staged bytes and moves the rest to the front.
    pub(crate) fn compact(&mut self, consumed: usize) {
        debug_assert!(consumed <= self.fill);
        self.data.copy_within(consumed..self.fill, 0);
        self.fill -= consumed;
    }

    /// Zero-fills from the fill position up to `len` and returns `data[..len]`.
    ///
    /// The fill position is not moved.
    pub(crate) fn pad_to(&mut self, len: usize) -> &[u8] {
        debug_assert!(self.fill <= len && len <= self.capacity());
        self.data[self.fill..len].fill(0);
        &self.data[..len]
    }

    pub(crate) fn clear(&mut self) {
        self.fill = 0;
    }
}
