//! Single-bit and scalar segments.

use crate::segment::Field;
use crate::{ByteSink, Result, Writer};

/// A single-bit field at a fixed byte offset and bit index.
///
/// Bit 0 is the most significant bit of the addressed byte. The value is
/// `0` or `1`; setting any non-zero value sets the bit.
pub struct BitSegment<'v, 'b, B: ?Sized + ByteSink = [u8]> {
    view: &'v mut Writer<'b, B>,
    offset: usize,
    bit: u8,
}

impl<'v, 'b, B: ?Sized + ByteSink> BitSegment<'v, 'b, B> {
    /// Binds a bit field to `view` at byte `offset`, bit `bit`.
    pub fn new(view: &'v mut Writer<'b, B>, offset: usize, bit: u8) -> Self {
        Self { view, offset, bit }
    }
}

impl<'v, 'b, B: ?Sized + ByteSink> Field for BitSegment<'v, 'b, B> {
    type Value = u8;

    fn value(&self) -> Result<u8> {
        self.view.read_bit(self.offset, self.bit)
    }

    fn set_value(&mut self, value: u8) -> Result<()> {
        self.view.write_bit(value != 0, self.bit, self.offset)
    }
}

macro_rules! scalar_segment {
    ($($(#[$meta:meta])* ($name:ident, $ty:ty, $read:ident, $write:ident)),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name<'v, 'b, B: ?Sized + ByteSink = [u8]> {
                view: &'v mut Writer<'b, B>,
                offset: usize,
            }

            impl<'v, 'b, B: ?Sized + ByteSink> $name<'v, 'b, B> {
                /// Binds the field to `view` at `offset`.
                pub fn new(view: &'v mut Writer<'b, B>, offset: usize) -> Self {
                    Self { view, offset }
                }
            }

            impl<'v, 'b, B: ?Sized + ByteSink> Field for $name<'v, 'b, B> {
                type Value = $ty;

                #[inline]
                fn value(&self) -> Result<$ty> {
                    self.view.$read(self.offset)
                }

                #[inline]
                fn set_value(&mut self, value: $ty) -> Result<()> {
                    self.view.$write(value, self.offset)
                }
            }
        )*
    };
}

scalar_segment!(
    /// An unsigned byte field.
    (U8Segment, u8, read_u8, write_u8),
    /// A signed byte field.
    (I8Segment, i8, read_i8, write_i8),
    /// A big-endian `u16` field.
    (U16Segment, u16, read_u16, write_u16),
    /// A big-endian `i16` field.
    (I16Segment, i16, read_i16, write_i16),
    /// A big-endian `u32` field.
    (U32Segment, u32, read_u32, write_u32),
    /// A big-endian `i32` field.
    (I32Segment, i32, read_i32, write_i32),
    /// A big-endian `u64` field.
    (U64Segment, u64, read_u64, write_u64),
    /// A big-endian `i64` field.
    (I64Segment, i64, read_i64, write_i64),
    /// A big-endian `f32` field.
    (F32Segment, f32, read_f32, write_f32),
    /// A big-endian `f64` field.
    (F64Segment, f64, read_f64, write_f64),
);
