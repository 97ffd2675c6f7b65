//! The bitmap segment.

use crate::segment::Field;
use crate::{ByteSink, Error, Result, Writer};

/// A fixed-bit-length field addressed both as whole bytes and as
/// individually indexed bits.
///
/// The bitmap occupies `ceil(bit_length / 8)` bytes. Bit `i` lives in byte
/// `i / 8` at bit position `i % 8`, counted from the most significant bit,
/// matching the view's single-bit accessors.
pub struct BitmapSegment<'v, 'b, B: ?Sized + ByteSink = [u8]> {
    view: &'v mut Writer<'b, B>,
    offset: usize,
    bit_length: usize,
    byte_length: usize,
}

impl<'v, 'b, B: ?Sized + ByteSink> BitmapSegment<'v, 'b, B> {
    /// Binds a bitmap of `bit_length` bits to `view` at byte `offset`.
    pub fn new(view: &'v mut Writer<'b, B>, offset: usize, bit_length: usize) -> Self {
        Self {
            view,
            offset,
            bit_length,
            byte_length: bit_length.div_ceil(8),
        }
    }

    /// Number of addressable bits.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Number of bytes the bitmap occupies.
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Reads bit `index`.
    ///
    /// Fails with [`Error::OutOfBounds`] (in bit units) if
    /// `index >= bit_length`.
    pub fn bit(&self, index: usize) -> Result<u8> {
        self.check(index)?;
        self.view.read_bit(self.offset + index / 8, (index % 8) as u8)
    }

    /// Writes bit `index`.
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        self.check(index)?;
        self.view.write_bit(value, (index % 8) as u8, self.offset + index / 8)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.bit_length {
            return Err(Error::OutOfBounds {
                offset: index,
                len: 1,
                window: self.bit_length,
            });
        }
        Ok(())
    }
}

impl<'v, 'b, B: ?Sized + ByteSink> Field for BitmapSegment<'v, 'b, B> {
    type Value = Vec<u8>;

    /// Returns the bitmap's `byte_length` bytes.
    fn value(&self) -> Result<Vec<u8>> {
        Ok(self.view.slice(self.offset, self.byte_length)?.to_vec())
    }

    /// Overwrites the bitmap's bytes from `value`.
    ///
    /// Fails with [`Error::OutOfBounds`] if `value` is longer than the
    /// bitmap's byte length.
    fn set_value(&mut self, value: Vec<u8>) -> Result<()> {
        let mut slot = self.view.slice_mut(self.offset, self.byte_length)?;
        slot.put_bytes(&value, 0)
    }
}
