//! Memory Buffer Implementation.
//!
//! This module provides the backing store for simulated memory. The buffer is a
//! zero-filled, heap-allocated byte array whose length is rounded up to the
//! memory block granularity. It performs no bounds policy of its own: callers
//! validate ranges before slicing.

use std::fmt;
use std::ops::Range;

use crate::common::constants::BLOCK_SIZE;

/// Zero-filled backing storage for a [`Memory`](super::Memory).
#[derive(Clone, PartialEq, Eq)]
pub struct MemBuffer {
    bytes: Box<[u8]>,
}

impl MemBuffer {
    /// Creates a new buffer of at least `size` bytes.
    ///
    /// The size is rounded up to the next multiple of [`BLOCK_SIZE`].
    ///
    /// # Arguments
    ///
    /// * `size` - Requested size of the buffer in bytes.
    pub fn new(size: usize) -> Self {
        Self::with_granularity(size, BLOCK_SIZE)
    }

    /// Creates a new buffer of at least `size` bytes, rounded up to a multiple of `block`.
    ///
    /// A `block` of zero is treated as one.
    pub fn with_granularity(size: usize, block: usize) -> Self {
        let block = block.max(1);
        let len = size.div_ceil(block) * block;
        Self {
            bytes: vec![0u8; len].into_boxed_slice(),
        }
    }

    /// Returns the size of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Sets every byte to zero.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Returns the whole buffer as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the byte range `range`; the range must already be validated.
    #[inline]
    pub(crate) fn slice(&self, range: Range<usize>) -> &[u8] {
        &self.bytes[range]
    }

    /// Returns the mutable byte range `range`; the range must already be validated.
    #[inline]
    pub(crate) fn slice_mut(&mut self, range: Range<usize>) -> &mut [u8] {
        &mut self.bytes[range]
    }
}

impl fmt::Debug for MemBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemBuffer")
            .field("len", &self.bytes.len())
            .finish()
    }
}
