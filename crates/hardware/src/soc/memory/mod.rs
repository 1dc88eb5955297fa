//! Byte-Addressable System Memory.
//!
//! This module implements the simulated memory shared by instruction fetch and
//! data accesses. It provides:
//! 1. **Buffer:** Zero-filled backing storage rounded up to the block size.
//! 2. **Bounds Checking:** Every access of width `w` at `a` requires `a + w <= len`.
//! 3. **Typed Access:** Byte, word (4-byte) and double (8-byte) accessors plus bulk byte loads.
//!
//! Data accesses are little-endian. Instruction words are stored and fetched
//! most-significant byte first, which is the order boot images list them in.

/// Backing byte storage.
pub mod buffer;

use self::buffer::MemBuffer;
use crate::common::constants::{DOUBLE_SIZE, WORD_SIZE};
use crate::common::data::AccessType;
use crate::common::error::MemoryError;

/// Byte-addressable memory of fixed capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    buffer: MemBuffer,
}

impl Memory {
    /// Creates a zero-filled memory of at least `size` bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - Requested capacity; rounded up to the block size.
    pub fn new(size: usize) -> Self {
        Self {
            buffer: MemBuffer::new(size),
        }
    }

    /// Creates a zero-filled memory rounded up to a multiple of `block_size`.
    pub fn with_block_size(size: usize, block_size: usize) -> Self {
        Self {
            buffer: MemBuffer::with_granularity(size, block_size),
        }
    }

    /// Returns the capacity in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the memory has no capacity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Sets every byte to zero without reallocating.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the raw contents.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Validates an access and returns the byte range it covers.
    fn range(
        &self,
        access: AccessType,
        addr: u32,
        width: usize,
    ) -> Result<std::ops::Range<usize>, MemoryError> {
        let start = addr as usize;
        match start.checked_add(width) {
            Some(end) if end <= self.len() => Ok(start..end),
            _ => Err(MemoryError::OutOfBounds {
                access,
                addr,
                width,
                capacity: self.len(),
            }),
        }
    }

    /// Reads one byte.
    pub fn read_u8(&self, addr: u32) -> Result<u8, MemoryError> {
        let r = self.range(AccessType::Read, addr, 1)?;
        Ok(self.buffer.slice(r)[0])
    }

    /// Writes one byte.
    pub fn write_u8(&mut self, addr: u32, val: u8) -> Result<(), MemoryError> {
        let r = self.range(AccessType::Write, addr, 1)?;
        self.buffer.slice_mut(r)[0] = val;
        Ok(())
    }

    /// Reads a little-endian 4-byte word.
    pub fn read_u32(&self, addr: u32) -> Result<u32, MemoryError> {
        let r = self.range(AccessType::Read, addr, WORD_SIZE)?;
        let mut word = [0u8; WORD_SIZE];
        word.copy_from_slice(self.buffer.slice(r));
        Ok(u32::from_le_bytes(word))
    }

    /// Writes a little-endian 4-byte word.
    pub fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), MemoryError> {
        let r = self.range(AccessType::Write, addr, WORD_SIZE)?;
        self.buffer.slice_mut(r).copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Reads a little-endian 8-byte double word.
    pub fn read_u64(&self, addr: u32) -> Result<u64, MemoryError> {
        let r = self.range(AccessType::Read, addr, DOUBLE_SIZE)?;
        let mut dword = [0u8; DOUBLE_SIZE];
        dword.copy_from_slice(self.buffer.slice(r));
        Ok(u64::from_le_bytes(dword))
    }

    /// Writes a little-endian 8-byte double word.
    pub fn write_u64(&mut self, addr: u32, val: u64) -> Result<(), MemoryError> {
        let r = self.range(AccessType::Write, addr, DOUBLE_SIZE)?;
        self.buffer.slice_mut(r).copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Fetches an instruction word, most-significant byte first.
    ///
    /// Unlike data reads, the fetch also rejects an address that is not a
    /// multiple of the instruction size.
    pub fn fetch_u32(&self, addr: u32) -> Result<u32, MemoryError> {
        if addr % WORD_SIZE as u32 != 0 {
            return Err(MemoryError::Misaligned { addr });
        }
        let r = self.range(AccessType::Fetch, addr, WORD_SIZE)?;
        let mut word = [0u8; WORD_SIZE];
        word.copy_from_slice(self.buffer.slice(r));
        Ok(u32::from_be_bytes(word))
    }

    /// Stores an instruction word in the byte order [`fetch_u32`](Self::fetch_u32) expects.
    pub fn write_inst_u32(&mut self, addr: u32, inst: u32) -> Result<(), MemoryError> {
        let r = self.range(AccessType::Write, addr, WORD_SIZE)?;
        self.buffer.slice_mut(r).copy_from_slice(&inst.to_be_bytes());
        Ok(())
    }

    /// Copies `data` into memory starting at `addr`.
    ///
    /// Nothing is written if any byte would fall outside memory.
    pub fn load_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), MemoryError> {
        let r = self.range(AccessType::Write, addr, data.len())?;
        self.buffer.slice_mut(r).copy_from_slice(data);
        Ok(())
    }
}
