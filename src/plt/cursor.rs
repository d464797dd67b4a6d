//! Low-level field decoding over a fully buffered file.

use byteorder::{ByteOrder, LittleEndian};
use super::error::{PltError, Result};

/// Sequential little-endian field reader over a byte slice.
///
/// Every read either advances the position by the exact field width or fails
/// with [`PltError::TruncatedInput`]; the position never moves backwards.
#[derive(Debug)]
pub struct Cursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `buffer` starting at the absolute offset `position`.
    pub fn new(buffer: &'a [u8], position: usize) -> Self {
        Self { buffer, position }
    }

    /// Current absolute offset into the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    fn take(&mut self, width: usize, context: &'static str) -> Result<&'a [u8]> {
        let end = self
            .position
            .checked_add(width)
            .filter(|&end| end <= self.buffer.len())
            .ok_or(PltError::TruncatedInput {
                context,
                offset: self.position,
            })?;
        let bytes = &self.buffer[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Advance past `width` bytes without decoding them.
    pub fn skip(&mut self, width: usize, context: &'static str) -> Result<()> {
        self.take(width, context).map(|_| ())
    }

    pub fn read_i16(&mut self, context: &'static str) -> Result<i16> {
        self.take(2, context).map(LittleEndian::read_i16)
    }

    pub fn read_i32(&mut self, context: &'static str) -> Result<i32> {
        self.take(4, context).map(LittleEndian::read_i32)
    }

    pub fn read_u32(&mut self, context: &'static str) -> Result<u32> {
        self.take(4, context).map(LittleEndian::read_u32)
    }

    pub fn read_f64(&mut self, context: &'static str) -> Result<f64> {
        self.take(8, context).map(LittleEndian::read_f64)
    }

    /// Read `len` consecutive u32 values at a fixed 4-byte stride.
    pub fn read_u32_array(&mut self, len: usize, context: &'static str) -> Result<Vec<u32>> {
        let width = len.checked_mul(4).ok_or(PltError::TruncatedInput {
            context,
            offset: self.position,
        })?;
        let bytes = self.take(width, context)?;
        let mut values = vec![0u32; len];
        LittleEndian::read_u32_into(bytes, &mut values);
        Ok(values)
    }

    /// Read `len` consecutive f32 values at a fixed 4-byte stride.
    pub fn read_f32_array(&mut self, len: usize, context: &'static str) -> Result<Vec<f32>> {
        let width = len.checked_mul(4).ok_or(PltError::TruncatedInput {
            context,
            offset: self.position,
        })?;
        let bytes = self.take(width, context)?;
        let mut values = vec![0f32; len];
        LittleEndian::read_f32_into(bytes, &mut values);
        Ok(values)
    }
}
